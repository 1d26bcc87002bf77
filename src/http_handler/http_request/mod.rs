pub mod crdb_dataset_get;
pub mod kp_index_get;
pub mod proton_flux_get;
pub mod request_common;
