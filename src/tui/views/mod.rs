pub mod admin_campaign_list;
pub mod campaign_rows;
pub mod new_campaign;
