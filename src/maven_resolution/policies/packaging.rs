/// PackagingPolicy maps a POM `<packaging>` value to the artifact file extension
///
/// Packagings that produce a plain Java archive (bundle, maven-plugin,
/// test-jar) map to `jar`, as does anything unknown.
pub struct PackagingPolicy;

impl PackagingPolicy {
    pub fn extension_for(packaging: &str) -> &'static str {
        match packaging {
            "jar" | "bundle" | "maven-plugin" | "test-jar" => "jar",
            "war" => "war",
            "ear" => "ear",
            "rar" => "rar",
            "zip" => "zip",
            "tar.gz" => "tar.gz",
            "apk" => "apk",
            "aar" => "aar",
            "pom" => "pom",
            _ => "jar",
        }
    }
}
