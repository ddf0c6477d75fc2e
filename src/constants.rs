// src/constants.rs
//! Domain constants that define the operational boundaries of the system.
//!
//! Each constant is named for the domain concept it constrains, not its
//! technical role. The identifiers here are coupled to one specific
//! Notion page: if that page is restructured upstream, truncation and
//! scheduling behavior change silently.

// ---------------------------------------------------------------------------
// Menu page boundaries
// ---------------------------------------------------------------------------

/// Host serving the public menu page.
pub const MENU_HOST: &str = "https://beforeitmelts.notion.site";

/// Root block of the menu page. Everything the crawler reads hangs off
/// this one record.
pub const MENU_PAGE_ID: &str = "b261c537-bf9a-4fa7-9a94-c3b8a79fa573";

/// Child block at which menu iteration stops. Blocks after this marker
/// are page furniture (ordering instructions, map embeds), not menu items.
pub const MENU_END_MARKER_ID: &str = "020728e2-407c-4602-aa71-ea145219ad69";

/// How many block records one page chunk request returns.
///
/// The chunk endpoint caps at 100. A single chunk is fetched per run;
/// children past this limit are simply absent from the block table.
pub const PAGE_CHUNK_LIMIT: u32 = 100;

/// Browser-id cookie value sent with every page request. The hosted-page
/// endpoints want a session-shaped cookie but do not validate it against
/// an account.
pub const BROWSER_COOKIE: &str = "notion_browser_id=186eb47e-b3c7-4b78-b229-ae415df2ae75";

// ---------------------------------------------------------------------------
// Schedule
// ---------------------------------------------------------------------------

/// Weekday on which the shop is closed and no menu is published.
pub const REST_WEEKDAY: chrono::Weekday = chrono::Weekday::Tue;

/// The full report for a rest day.
pub const REST_DAY_NOTICE: &str = "오늘은 쉬는날! \n아이스크림 얼리는 중... 🥶🥶🥶";

// ---------------------------------------------------------------------------
// Report shape
// ---------------------------------------------------------------------------

/// Closing line pointing readers at the web version of the menu.
pub const WEB_MENU_FOOTER: &str =
    "https://baeminn.me/DTFYhSJbn 를 이용하시면 웹에서 메뉴를 볼 수 있습니다.";

/// Upper bound on body lines in the condensed gist layout. The menu body
/// is folded into at most this many columns, each holding a contiguous
/// run of menu items.
pub const SNIPPET_BODY_COLUMNS: usize = 4;

/// Separator between menu items folded onto one snippet line.
pub const SNIPPET_ITEM_SEPARATOR: &str = " | ";

/// Default file name inside the target gist.
pub const DEFAULT_GIST_FILE: &str = "menu.md";

// ---------------------------------------------------------------------------
// Snippet service
// ---------------------------------------------------------------------------

/// Base URL of the gist API.
pub const GIST_API_BASE_URL: &str = "https://api.github.com/gists";

/// User agent for gist requests. GitHub rejects requests without one.
pub const GIST_USER_AGENT: &str = concat!("menu2gist/", env!("CARGO_PKG_VERSION"));

/// Maximum characters shown when previewing error response bodies.
pub const ERROR_BODY_PREVIEW_LENGTH: usize = 200;
