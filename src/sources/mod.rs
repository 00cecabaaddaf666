//! Converters bringing other knowledge graphs into the ConceptNet layout.

pub mod webchild;
pub mod yago;

use clap::ValueEnum;

/// Field layouts of the WebChild subgraph dumps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum WebChildLayout {
    /// Headed files with `#x`, `y`, `r`, `score`, `sources` columns.
    PartWhole,
    /// Headerless noun-attribute-value property dumps.
    Property,
    /// Headerless action-attribute-value activity dumps.
    Activity,
    /// Headerless spatial dumps with article counts.
    Spatial,
}
