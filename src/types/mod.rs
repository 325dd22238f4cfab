mod attachment;

pub use attachment::{Attachment, Field, COLOR};
