pub mod button;
pub mod celebration;
pub mod clock_face;
pub mod digital_readout;
pub mod quiz_panel;
pub mod score_bar;
