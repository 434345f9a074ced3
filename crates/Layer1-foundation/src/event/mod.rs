//! Event - 이벤트 기본 계약
//!
//! 브로커가 `fire` 호출마다 새로 만들어 리스너에게 전달하는 값입니다.
//!
//! ## 사용법
//!
//! ```ignore
//! use herald_foundation::{impl_event, event::{Event, EventArgs, EventState}};
//!
//! #[derive(Debug)]
//! struct Message {
//!     state: EventState,
//!     content: String,
//! }
//!
//! impl_event!(Message);
//!
//! impl Message {
//!     fn from_args(args: &EventArgs) -> herald_foundation::Result<Self> {
//!         Ok(Self { state: EventState::new(), content: args.required(0)? })
//!     }
//! }
//! ```

pub mod args;
pub mod types;

pub use args::EventArgs;
pub use types::{AsAny, Event, EventState};
