pub mod claim_airdrop;
pub mod claim_creator_proceeds;
pub mod claim_creator_tokens;
pub mod claim_refund;
pub mod create_project;
pub mod finalize_project;
pub mod initialize_config;
pub mod mint_star_points;
pub mod participate_in_project;
pub mod queries;
pub mod reclaim_project_tokens;
pub mod register_referrer;
pub mod update_config;
pub mod withdraw_treasury;

pub use claim_airdrop::*;
pub use claim_creator_proceeds::*;
pub use claim_creator_tokens::*;
pub use claim_refund::*;
pub use create_project::*;
pub use finalize_project::*;
pub use initialize_config::*;
pub use mint_star_points::*;
pub use participate_in_project::*;
pub use queries::*;
pub use reclaim_project_tokens::*;
pub use register_referrer::*;
pub use update_config::*;
pub use withdraw_treasury::*;
