mod event;
mod pen;

pub use event::{parse_input_event, read_events, INPUT_EVENT_SIZE_32, INPUT_EVENT_SIZE_64};
pub use pen::{PenFrameAssembler, OUT_OF_RANGE};

pub(crate) use event::{
    ABS_PRESSURE, ABS_X, ABS_Y, BTN_STYLUS, BTN_STYLUS2, BTN_STYLUS3, BTN_TOOL_PEN, BTN_TOOL_RUBBER, EV_ABS, EV_KEY,
    EV_SYN, SYN_REPORT,
};
