pub mod canvas;
pub mod floating_toolbox;
pub mod toolbars;
