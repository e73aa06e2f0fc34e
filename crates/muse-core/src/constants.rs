/// Muse engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// --- Continuation scoring weights ---
// These are load-bearing product constants, not tunable defaults. Changing
// any of them changes which ideas surface as continuations.

/// Weight of the title-token overlap factor.
pub const TITLE_OVERLAP_WEIGHT: f64 = 0.4;

/// The keyword-overlap ratio contributes directly, capped here.
pub const KEYWORD_OVERLAP_CAP: f64 = 0.3;

/// The category-term ratio contributes directly, capped here.
pub const CATEGORY_TERM_CAP: f64 = 0.2;

/// Flat bonus when the user text contains a continuation phrase.
pub const CONTINUATION_PHRASE_BONUS: f64 = 0.1;

/// Candidates scoring below this are never selected.
pub const DETECTION_FLOOR: f64 = 0.3;

// --- Suggested-action tiers ---

/// Confidence above this with an explicit continue/build/expand cue → update.
pub const ACTION_UPDATE_CUE_THRESHOLD: f64 = 0.7;
/// Confidence above this with a refine/improve/enhance cue → merge.
pub const ACTION_MERGE_CUE_THRESHOLD: f64 = 0.5;
/// Confidence above this with a different/alternative cue → new variation.
pub const ACTION_VARIATION_CUE_THRESHOLD: f64 = 0.4;
/// Cue-less fallback: above this → update.
pub const ACTION_UPDATE_DEFAULT_THRESHOLD: f64 = 0.6;
/// Cue-less fallback: above this → merge, otherwise new variation.
pub const ACTION_MERGE_DEFAULT_THRESHOLD: f64 = 0.4;

// --- Keyword extraction ---

/// Tokens must be strictly longer than this to survive extraction.
pub const MIN_KEYWORD_LEN: usize = 3;

/// Extraction keeps at most this many tokens, in original order.
pub const MAX_KEYWORDS: usize = 20;

// --- Ledger ---

/// Content change ratio above which a titled edit is a major revision.
pub const MAJOR_REVISION_RATIO: f64 = 0.5;

/// Separator inserted between target and source content on append merges.
pub const MERGE_SEPARATOR: &str = "\n\n---\n\n";

// --- Input limits ---

/// Maximum idea title length in characters.
pub const MAX_TITLE_LEN: usize = 200;

/// Maximum idea content length in characters.
pub const MAX_CONTENT_LEN: usize = 50_000;

/// Maximum prior development summaries attached to a signal.
pub const MAX_RECENT_DEVELOPMENTS: usize = 5;
