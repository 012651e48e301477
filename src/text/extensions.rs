use fst::Set;
use lazy_static::lazy_static;

/// File extensions `to_file` recognizes and keeps intact.
const FILE_EXTENSIONS: &[&str] = &[
    "3dm", "3ds", "3g2", "3gp", "7z", "accdb", "ai", "aif", "apk", "app", "asf", "asp", "aspx",
    "avi", "bak", "bat", "bin", "bmp", "c", "cab", "cbr", "cer", "cfg", "cfm", "cgi", "class",
    "com", "cpl", "cpp", "crdownload", "crx", "cs", "csr", "css", "csv", "cue", "cur", "dat",
    "db", "dbf", "dds", "deb", "dem", "deskthemepack", "dll", "dmg", "dmp", "doc", "docx", "drv",
    "dtd", "dwg", "dxf", "eps", "exe", "fla", "flv", "fnt", "fon", "gadget", "gam", "ged", "gif",
    "gpx", "gz", "h", "hqx", "htm", "html", "icns", "ico", "ics", "iff", "indd", "ini", "iso",
    "jar", "java", "jpg", "jpeg", "js", "jsp", "json", "key", "keychain", "kml", "kmz", "lnk",
    "log", "lua", "m", "m3u", "m4a", "m4v", "max", "mdb", "mdf", "mid", "mim", "mov", "mp3",
    "mp4", "mpa", "mpg", "msg", "msi", "nes", "obj", "odt", "otf", "pages", "part", "pct", "pdb",
    "pdf", "php", "pkg", "pl", "plugin", "png", "pps", "ppt", "pptx", "prf", "ps", "psd",
    "pspimage", "py", "rar", "rm", "rom", "rpm", "rss", "rtf", "sav", "sdf", "sh", "sitx", "sln",
    "sql", "srt", "svg", "swf", "swift", "sys", "tar", "tar.gz", "tax2016", "tex", "tga", "thm",
    "tif", "tiff", "tmp", "toast", "torrent", "ttf", "txt", "typescript", "ts", "typoscript",
    "uue", "vb", "vcd", "vcf", "vcxproj", "vob", "wav", "wma", "wmv", "wpd", "wps", "wsf",
    "xcodeproj", "xhtml", "xlr", "xls", "xlsx", "xml", "yuv", "zip", "zipx",
];

lazy_static! {
    static ref EXTENSION_SET: Set<Vec<u8>> = {
        let mut sorted = FILE_EXTENSIONS.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        Set::from_iter(sorted).expect("extension list is sorted and deduplicated")
    };
}

/// Case-insensitive membership test against the recognized extension set.
pub fn is_known_extension(ext: &str) -> bool {
    !ext.is_empty() && EXTENSION_SET.contains(ext.to_lowercase())
}

/// Split a recognized extension off the final path component of `input`.
///
/// Returns the byte offset of the separating dot together with the extension
/// text in its original case. Two-segment extensions such as `tar.gz` win
/// over their last segment.
pub fn split_extension(input: &str) -> Option<(usize, &str)> {
    let name_start = input.rfind(['/', '\\']).map_or(0, |idx| idx + 1);
    let name = &input[name_start..];

    let dots: Vec<usize> = name.match_indices('.').map(|(idx, _)| idx).collect();

    dots.iter()
        .rev()
        .take(2)
        .rev()
        .map(|&dot| (name_start + dot, &name[dot + 1..]))
        .find(|(_, ext)| is_known_extension(ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_membership_is_case_insensitive() {
        assert!(is_known_extension("jpg"));
        assert!(is_known_extension("JPG"));
        assert!(is_known_extension("Json"));
        assert!(!is_known_extension("jp"));
        assert!(!is_known_extension(""));
        assert!(!is_known_extension("あと"));
    }

    #[test]
    fn test_split_simple_extension() {
        assert_eq!(split_extension("Given string.jpg"), Some((12, "jpg")));
        assert_eq!(split_extension("Report.PDF"), Some((6, "PDF")));
        assert_eq!(split_extension("no extension"), None);
        assert_eq!(split_extension("trailing dot."), None);
    }

    #[test]
    fn test_split_prefers_compound_extension() {
        assert_eq!(split_extension("backup.tar.gz"), Some((6, "tar.gz")));
        assert_eq!(split_extension("backup.2020.gz"), Some((11, "gz")));
    }

    #[test]
    fn test_dots_in_directories_are_ignored() {
        assert_eq!(split_extension("some.dir/readme"), None);
        assert_eq!(split_extension("some.dir\\notes.txt"), Some((14, "txt")));
    }
}
