/// Batch entity module
pub mod tracker_batch;
/// Batch status log entity module
pub mod tracker_batch_log;
/// File entity module
pub mod tracker_file;
/// File status log entity module
pub mod tracker_file_log;

pub use tracker_batch::Entity as Batch;
pub use tracker_batch_log::Entity as BatchLog;
pub use tracker_file::Entity as File;
pub use tracker_file_log::Entity as FileLog;
