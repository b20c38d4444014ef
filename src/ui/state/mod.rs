pub mod demo_state;
pub mod table_state;
