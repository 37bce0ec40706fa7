//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter       | Implements            | Connects to                  |
//! |---------------|-----------------------|------------------------------|
//! | `buttons`     | InputPort             | GPIO via `embedded-hal`      |
//! | `console`     | DisplayPort, `log::Log` | stderr (simulator)         |
//! | `hardware`    | InputPort + DisplayPort | any input + any display    |
//! | `log_sink`    | EventSink             | Log output                   |
//! | `save_store`  | SavePort              | File on disk / memory        |
//! | `script`      | InputPort             | JSON button script           |
//! | `time`        | ClockPort             | Monotonic clock / sim clock  |

pub mod buttons;
pub mod console;
pub mod hardware;
pub mod log_sink;
pub mod save_store;
pub mod script;
pub mod time;
