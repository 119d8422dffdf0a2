//! Admission rule tables.
//!
//! One consolidated set of tables shared by the client-side pre-check and
//! the server-side gate. The original edge functions each carried their own
//! copy with diverging key names; this module is the single source of
//! truth.

use nest_types::listing::{ContentCategory, SellerPlan};
use nest_types::{BYTES_PER_GIB, BYTES_PER_MIB};

/// Extensions never accepted, regardless of category. Covers executables,
/// scripts, installers, server-side code, and archives that can hide
/// payloads. Compared lower-cased, without the leading dot.
pub const BLOCKED_EXTENSIONS: &[&str] = &[
    // Executables
    "exe", "dll", "so", "dylib",
    // Archives that could hide malware
    "zip", "7z", "rar", "tar", "gz",
    // Scripts
    "bat", "sh", "cmd", "ps1", "vbs",
    // Installers
    "msi", "app", "dmg",
    // Server scripts
    "php", "asp", "jsp", "cgi",
    // System files
    "sys", "bin", "dat",
];

/// Per-category admission rules: which declared MIME types a category
/// accepts. Extensions are policed by the block-list; consistency with the
/// category is judged on the MIME type alone.
#[derive(Clone, Copy, Debug)]
pub struct CategoryRules {
    /// Accepted declared MIME types, lower-case.
    pub allowed_mimes: &'static [&'static str],
}

/// Rules for categories that carry an uploadable file.
///
/// Returns `None` for service categories (chat, booking, membership) —
/// those listings have no file of their own and any upload against them is
/// unsupported.
pub fn category_rules(category: ContentCategory) -> Option<&'static CategoryRules> {
    match category {
        ContentCategory::Video => Some(&CategoryRules {
            allowed_mimes: &["video/mp4", "video/webm"],
        }),
        ContentCategory::Audio => Some(&CategoryRules {
            allowed_mimes: &["audio/mpeg", "audio/mp3", "audio/wav"],
        }),
        ContentCategory::DigitalProduct => Some(&CategoryRules {
            allowed_mimes: &["application/pdf"],
        }),
        ContentCategory::Image => Some(&CategoryRules {
            allowed_mimes: &["image/jpeg", "image/png"],
        }),
        ContentCategory::Blog => Some(&CategoryRules {
            allowed_mimes: &["text/plain"],
        }),
        ContentCategory::Chat | ContentCategory::Booking | ContentCategory::Membership => None,
    }
}

/// Per-file size ceilings by category.
///
/// Two stock tables exist: the plan-independent table the upload gate has
/// always enforced, and a plan-scaled table granting pro sellers the larger
/// ceilings promised in the plan copy. The pipeline takes the table as
/// configuration and is agnostic to which one the caller picked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CeilingTable {
    /// Category-fixed ceilings for every seller.
    Standard,
    /// Enlarged ceilings for pro-plan sellers.
    ProScaled,
}

impl CeilingTable {
    /// The plan-independent table (video 2 GiB, audio 500 MiB,
    /// digital product 100 MiB, image 10 MiB, blog 5 MiB).
    pub fn standard() -> Self {
        CeilingTable::Standard
    }

    /// The table for a given plan: free sellers get the standard ceilings,
    /// pro sellers the enlarged ones (video 5 GiB, audio 1 GiB,
    /// digital product 500 MiB, image 25 MiB, blog 10 MiB).
    pub fn plan_scaled(plan: SellerPlan) -> Self {
        match plan {
            SellerPlan::Free => CeilingTable::Standard,
            SellerPlan::Pro => CeilingTable::ProScaled,
        }
    }

    /// The ceiling in bytes for a category, `None` for service categories.
    pub fn ceiling_bytes(&self, category: ContentCategory) -> Option<u64> {
        let bytes = match (self, category) {
            (CeilingTable::Standard, ContentCategory::Video) => 2 * BYTES_PER_GIB,
            (CeilingTable::Standard, ContentCategory::Audio) => 500 * BYTES_PER_MIB,
            (CeilingTable::Standard, ContentCategory::DigitalProduct) => 100 * BYTES_PER_MIB,
            (CeilingTable::Standard, ContentCategory::Image) => 10 * BYTES_PER_MIB,
            (CeilingTable::Standard, ContentCategory::Blog) => 5 * BYTES_PER_MIB,
            (CeilingTable::ProScaled, ContentCategory::Video) => 5 * BYTES_PER_GIB,
            (CeilingTable::ProScaled, ContentCategory::Audio) => BYTES_PER_GIB,
            (CeilingTable::ProScaled, ContentCategory::DigitalProduct) => 500 * BYTES_PER_MIB,
            (CeilingTable::ProScaled, ContentCategory::Image) => 25 * BYTES_PER_MIB,
            (CeilingTable::ProScaled, ContentCategory::Blog) => 10 * BYTES_PER_MIB,
            (_, ContentCategory::Chat)
            | (_, ContentCategory::Booking)
            | (_, ContentCategory::Membership) => return None,
        };
        Some(bytes)
    }
}

impl Default for CeilingTable {
    fn default() -> Self {
        CeilingTable::standard()
    }
}

/// The file extension, lower-cased, taken after the last dot.
///
/// `None` if the name has no dot.
pub fn extension(file_name: &str) -> Option<String> {
    let (_, ext) = file_name.rsplit_once('.')?;
    Some(ext.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nest_types::listing::ALL_CATEGORIES;

    #[test]
    fn test_service_categories_have_no_rules() {
        assert!(category_rules(ContentCategory::Chat).is_none());
        assert!(category_rules(ContentCategory::Booking).is_none());
        assert!(category_rules(ContentCategory::Membership).is_none());
    }

    #[test]
    fn test_file_categories_have_rules() {
        for category in [
            ContentCategory::Video,
            ContentCategory::Audio,
            ContentCategory::DigitalProduct,
            ContentCategory::Image,
            ContentCategory::Blog,
        ] {
            let rules = category_rules(category).expect("file category has rules");
            assert!(!rules.allowed_mimes.is_empty());
        }
    }

    #[test]
    fn test_standard_ceilings() {
        let table = CeilingTable::standard();
        assert_eq!(
            table.ceiling_bytes(ContentCategory::Video),
            Some(2 * BYTES_PER_GIB)
        );
        assert_eq!(
            table.ceiling_bytes(ContentCategory::Audio),
            Some(500 * BYTES_PER_MIB)
        );
        assert_eq!(
            table.ceiling_bytes(ContentCategory::DigitalProduct),
            Some(100 * BYTES_PER_MIB)
        );
        assert_eq!(
            table.ceiling_bytes(ContentCategory::Image),
            Some(10 * BYTES_PER_MIB)
        );
        assert_eq!(
            table.ceiling_bytes(ContentCategory::Blog),
            Some(5 * BYTES_PER_MIB)
        );
        assert_eq!(table.ceiling_bytes(ContentCategory::Chat), None);
    }

    #[test]
    fn test_plan_scaled_table_selection() {
        assert_eq!(
            CeilingTable::plan_scaled(SellerPlan::Free),
            CeilingTable::Standard
        );
        assert_eq!(
            CeilingTable::plan_scaled(SellerPlan::Pro),
            CeilingTable::ProScaled
        );
    }

    #[test]
    fn test_pro_ceilings_are_larger() {
        let standard = CeilingTable::Standard;
        let pro = CeilingTable::ProScaled;
        for category in ALL_CATEGORIES {
            let s = standard.ceiling_bytes(category);
            let p = pro.ceiling_bytes(category);
            assert_eq!(s.is_some(), p.is_some(), "tables disagree on {category:?}");
            if let (Some(s), Some(p)) = (s, p) {
                assert!(p > s, "pro ceiling must exceed standard for {category:?}");
            }
        }
    }

    #[test]
    fn test_pro_video_ceiling_is_5_gib() {
        assert_eq!(
            CeilingTable::ProScaled.ceiling_bytes(ContentCategory::Video),
            Some(5 * BYTES_PER_GIB)
        );
    }

    #[test]
    fn test_extension_extraction() {
        assert_eq!(extension("movie.MP4"), Some("mp4".to_string()));
        assert_eq!(extension("archive.tar.gz"), Some("gz".to_string()));
        assert_eq!(extension("README"), None);
        assert_eq!(extension("trailing."), Some(String::new()));
    }

    #[test]
    fn test_blocklist_is_lower_case_dotless() {
        for ext in BLOCKED_EXTENSIONS {
            assert!(!ext.starts_with('.'));
            assert_eq!(*ext, ext.to_lowercase().as_str());
        }
    }
}
