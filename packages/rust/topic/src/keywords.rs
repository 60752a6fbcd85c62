//! Technology-keyword extraction from free-text subject context.
//!
//! Each rule is independent and substring-guarded; the guards exist to keep
//! sibling technologies from bleeding into each other ("java" must never
//! fire off a "javascript" mention, "c" must never fire off "c++" or "c#").

use readscout_shared::TechKeyword;
use tracing::debug;

/// Extract canonical technology tags from a free-text context string
/// (e.g. "Android Mobile Programming, Kotlin, Java" → android, kotlin, java).
///
/// Returns a deduplicated, order-stable list. Empty context yields an
/// empty list; multiple keywords may co-occur.
pub fn extract_tech_keywords(context: &str) -> Vec<TechKeyword> {
    let lower = context.to_lowercase();
    if lower.trim().is_empty() {
        return Vec::new();
    }

    let mut found: Vec<&'static str> = Vec::new();

    let has = |needle: &str| lower.contains(needle);

    // C fires only on the literal word or an explicit phrase, and never in
    // the presence of its siblings.
    if (has_word(&lower, "c") || has("c language") || has("c programming"))
        && !has("c++")
        && !has("cpp")
        && !has("c#")
        && !has("sharp")
    {
        push_unique(&mut found, "c");
    }

    if has("c++") || has("cpp") {
        push_unique(&mut found, "c++");
    }

    if has("c#") || has("c sharp") {
        push_unique(&mut found, "c#");
    }

    // "dotnet.vn" is a site name, not a .NET mention.
    if (has(".net") || has("dotnet")) && !has("dotnet.vn") {
        push_unique(&mut found, ".net");
    }

    if has("asp.net") {
        push_unique(&mut found, "asp.net");
    }

    if has("java") && !has("javascript") {
        push_unique(&mut found, "java");
        if has("servlet") || has("jsp") {
            push_unique(&mut found, "java-web");
        }
        if has("spring") {
            push_unique(&mut found, "spring");
        }
    }

    if has("javascript") {
        push_unique(&mut found, "javascript");
    }

    if has("typescript") {
        push_unique(&mut found, "typescript");
    }

    if has("node") {
        push_unique(&mut found, "nodejs");
    }

    if has("react") {
        push_unique(&mut found, "react");
    }

    if has("vue") {
        push_unique(&mut found, "vue");
    }

    if has("angular") {
        push_unique(&mut found, "angular");
    }

    if has("android") {
        push_unique(&mut found, "android");
    }

    if has("kotlin") {
        push_unique(&mut found, "kotlin");
    }

    if has("flutter") || has("dart") {
        push_unique(&mut found, "flutter");
    }

    if has_word(&lower, "ios") || has("swift") {
        push_unique(&mut found, "ios");
    }

    if has("sql") {
        push_unique(&mut found, "sql");
    }

    if has("database") || has("cơ sở dữ liệu") {
        push_unique(&mut found, "database");
    }

    if has("python") {
        push_unique(&mut found, "python");
    }

    debug!(context, keywords = ?found, "extracted technology keywords");

    found.into_iter().map(TechKeyword::new).collect()
}

fn push_unique(found: &mut Vec<&'static str>, tag: &'static str) {
    if !found.contains(&tag) {
        found.push(tag);
    }
}

/// Token-level word check. Splits on anything that is not alphanumeric,
/// `+`, or `#`, so "C," and "c;" match but "cpp" and "c#" do not.
fn has_word(lower: &str, word: &str) -> bool {
    lower
        .split(|ch: char| !ch.is_alphanumeric() && ch != '+' && ch != '#')
        .any(|tok| tok == word)
}

#[cfg(test)]
mod tests {
    use super::*;
    use readscout_shared::has_keyword;

    fn tags(context: &str) -> Vec<String> {
        extract_tech_keywords(context)
            .into_iter()
            .map(|k| k.as_str().to_string())
            .collect()
    }

    #[test]
    fn empty_context_yields_nothing() {
        assert!(extract_tech_keywords("").is_empty());
        assert!(extract_tech_keywords("   ").is_empty());
    }

    #[test]
    fn dotnet_stack() {
        let kws = extract_tech_keywords("ASP.NET Core, C#");
        assert!(has_keyword(&kws, "c#"));
        assert!(has_keyword(&kws, "asp.net"));
        assert!(has_keyword(&kws, ".net"));
        assert!(!has_keyword(&kws, "java"));
        assert!(!has_keyword(&kws, "c"));
    }

    #[test]
    fn javascript_blocks_java() {
        let kws = extract_tech_keywords("JavaScript and Java");
        assert!(has_keyword(&kws, "javascript"));
        assert!(!has_keyword(&kws, "java"));
    }

    #[test]
    fn plain_java_with_web_stack() {
        let kws = extract_tech_keywords("Java Web Programming, Servlet/JSP, Spring Boot");
        assert!(has_keyword(&kws, "java"));
        assert!(has_keyword(&kws, "java-web"));
        assert!(has_keyword(&kws, "spring"));
    }

    #[test]
    fn c_requires_literal_word() {
        assert_eq!(tags("C Programming"), vec!["c"]);
        assert_eq!(tags("Intro, C, Pointers"), vec!["c"]);
        // Sibling guards
        assert!(!tags("C++ Programming").contains(&"c".to_string()));
        assert!(!tags("C# and .NET").contains(&"c".to_string()));
        // "c" must not fire off random words containing the letter
        assert!(tags("Computer Networks").is_empty());
    }

    #[test]
    fn android_stack() {
        let kws = extract_tech_keywords("Android Mobile Programming, Kotlin, Java");
        assert!(has_keyword(&kws, "android"));
        assert!(has_keyword(&kws, "kotlin"));
        assert!(has_keyword(&kws, "java"));
    }

    #[test]
    fn dotnet_vn_false_positive_excluded() {
        let kws = extract_tech_keywords("see dotnet.vn for examples");
        assert!(!has_keyword(&kws, ".net"));
    }

    #[test]
    fn ios_requires_word_boundary() {
        assert!(has_keyword(&extract_tech_keywords("iOS Development"), "ios"));
        assert!(!has_keyword(&extract_tech_keywords("BIOS basics"), "ios"));
    }

    #[test]
    fn results_are_deduplicated() {
        let kws = extract_tech_keywords("python, Python, PYTHON scripting");
        assert_eq!(kws.len(), 1);
        assert!(has_keyword(&kws, "python"));
    }
}
