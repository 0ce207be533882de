//! Campaign list domain: status and sort tags, filter, selection and the
//! list-view reducer.

pub mod list_state;
pub mod selection;
pub mod types;

pub use list_state::{CampaignListState, ChildListProps, ListEvent, ListViewParams};
pub use selection::CampaignSelection;
pub use types::{
    ArchivedCampaign, CampaignStatus, CampaignSummary, CampaignsFilter, CheckedPayload, SortBy,
};
