pub mod one_shot;
