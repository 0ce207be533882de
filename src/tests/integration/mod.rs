//! End-to-end flows through the campaign list view: operator input in,
//! router pushes, archive calls and rendered output out.

mod admin_list_flow;
