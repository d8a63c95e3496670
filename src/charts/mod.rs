// src/charts/mod.rs

pub mod defaults;
pub mod definitions;
pub mod editor;
pub mod events;
pub mod grid;
pub mod highlight;
pub mod plugin;
pub mod registry;

pub use definitions::{ChartCategory, SizeRow};
pub use editor::{EditorError, EditorSession};
pub use grid::ChartGrid;
pub use plugin::ChartsPlugin;
pub use registry::ChartRegistry;
