#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigApiMissing,
    ConfigEnvIgnored(String, String), // variable, value
    ConfigShow(String),               // rendered JSON

    // === LIST MESSAGES ===
    ListLoadFailed(String), // resource
    ListEmpty(String),      // resource
    ListPageInfo {
        page: u32,
        total_pages: u64,
        total_count: u64,
    },
    ListExported(usize, String), // rows, resource

    // === SESSION TIME MESSAGES ===
    EndTime(String),     // HH:MM
    OverstayMinutes(i64),
    OverstayNone,
    InvalidTimeInput(String), // reason
}
