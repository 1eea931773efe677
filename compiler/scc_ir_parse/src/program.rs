use std::fmt;

/// Pipeline stage a shader program targets.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ProgramKind {
    Vertex,
    Pixel,
    Compute,
}

impl ProgramKind {
    /// Resolve a program type by its declared name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "vertex" => Some(ProgramKind::Vertex),
            "pixel" => Some(ProgramKind::Pixel),
            "compute" => Some(ProgramKind::Compute),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ProgramKind::Vertex => "vertex",
            ProgramKind::Pixel => "pixel",
            ProgramKind::Compute => "compute",
        }
    }
}

impl fmt::Display for ProgramKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
