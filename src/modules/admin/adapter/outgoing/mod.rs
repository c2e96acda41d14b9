mod auto_approve;

pub use auto_approve::AutoApprove;
