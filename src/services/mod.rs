// Presentation-side services
// Data shaping for the UI layer; no rendering happens here.

pub mod recent_panel;
