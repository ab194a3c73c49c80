pub mod synthetic_map;
