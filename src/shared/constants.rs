/// Number of questions in one page of any question listing
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Page served when the client does not send a usable `page` parameter
pub const DEFAULT_PAGE: i64 = 1;

/// `quiz_category.id` value meaning "draw from every category"
pub const ALL_CATEGORIES_ID: i32 = 0;
