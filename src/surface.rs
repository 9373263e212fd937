//! Rendered-page collaborators: analytic slot layout and the surface trait
//! consumed by the PDF compositor.

pub mod layout;
pub mod page;
