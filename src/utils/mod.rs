pub mod input_limits;
