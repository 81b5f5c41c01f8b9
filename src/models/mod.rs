pub mod producto;
