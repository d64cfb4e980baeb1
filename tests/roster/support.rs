
pub use fixtures::{
    ADMIN_CREDENTIAL, ADMIN_EMAIL, BOOTSTRAP_EMAIL, MEMBER_EMAIL, USER_CREDENTIAL, admin_caller,
    bearer_headers, caller, fixed_now, user_caller,
};
pub use harness::{RosterHarness, bootstrap_admins, create_roster_harness};
