mod daily_post_card;
pub use daily_post_card::DailyPostCard;

mod date_ribbon;
pub use date_ribbon::DateRibbon;

mod navigation_tabs;
pub use navigation_tabs::NavigationTabs;

mod user_profile_header;
pub use user_profile_header::UserProfileHeader;
