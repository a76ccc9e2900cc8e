/// User agent string sent with every request to the TalentScope API
pub const USER_AGENT: &str = "talentscope-client/0.1.0";
/// Base URL used when `TALENTSCOPE_BASE_URL` is not set
pub const DEFAULT_BASE_URL: &str = "https://api.talentscope.com";
/// Default total request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Default timeout in seconds for establishing a connection
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Largest file accepted for CV parsing (2048 KiB)
pub const MAX_FILE_SIZE_BYTES: u64 = 2_097_152;
/// File extensions accepted for CV parsing, in the order they are reported
pub const ALLOWED_FILE_TYPES: [&str; 13] = [
    "pdf", "doc", "docx", "txt", "rtf", "odt", "html", "png", "jpg", "jpeg", "gif", "svg", "webp",
];
/// MIME types matching [`ALLOWED_FILE_TYPES`]
pub const ALLOWED_MIME_TYPES: [&str; 13] = [
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "text/plain",
    "application/rtf",
    "text/rtf",
    "application/vnd.oasis.opendocument.text",
    "text/html",
    "image/png",
    "image/jpeg",
    "image/gif",
    "image/svg+xml",
    "image/webp",
];
/// Multipart field name carrying the uploaded CV
pub const CV_FILE_FIELD: &str = "file";
