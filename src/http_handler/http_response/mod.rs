pub mod crdb_dataset;
pub mod kp_index;
pub mod proton_flux;
pub mod response_common;
