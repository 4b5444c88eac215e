pub mod highlight;
pub mod scale;
pub mod selector;
pub mod session;
pub mod tree;

pub use crate::domain::model::{
    DataPoint, RangeSelection, SelectorEvent, SelectorSnapshot, ValueDomain,
};
pub use crate::domain::ports::{ConfigProvider, EventSource, PathwaySource, SelectionView, Storage};
pub use crate::utils::error::Result;
