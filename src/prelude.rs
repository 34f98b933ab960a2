/*!
   Common convenient re-exports
*/

pub use crate::error::ExtractionError;
pub use crate::extraction::{extract, extract_physical};
pub use crate::mesh::Mesh;
pub use crate::obj::{write_obj, write_obj_to_file};
pub use crate::volume::{SliceStack, Volume};
