pub mod input_device;
