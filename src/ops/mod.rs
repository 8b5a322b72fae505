pub mod export_ops;
pub mod share_ops;
