//! Fixed table of values exported to the build environment file.
//!
//! The pipeline's build steps run inside a container and read their inputs
//! from a single `environment` file of `KEY=VALUE` lines. The table below is
//! the complete, ordered list of exported keys; resolution of each source
//! happens in [`crate::io::sources`].

/// Name of the generated file, relative to the working directory.
pub const ENV_FILE_NAME: &str = "environment";

/// Service-account key file checked for presence in the working directory.
pub const CREDENTIALS_FILE: &str = "credentials.json";

/// Path where the build container mounts the service-account key. The
/// emitted value is this constant, never the key file's content.
pub const CREDENTIALS_MOUNT_PATH: &str = "/ci/credentials.json";

/// Where a value comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueSource {
    /// Full contents of a working-directory file, used verbatim.
    File(&'static str),
    /// Process environment variable.
    Var(&'static str),
    /// [`CREDENTIALS_MOUNT_PATH`] when [`CREDENTIALS_FILE`] exists and is
    /// non-empty, empty otherwise.
    CredentialsPath,
}

/// One exported key and its source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvEntry {
    pub key: &'static str,
    pub source: ValueSource,
}

const fn entry(key: &'static str, source: ValueSource) -> EnvEntry {
    EnvEntry { key, source }
}

const fn var(key: &'static str) -> EnvEntry {
    entry(key, ValueSource::Var(key))
}

/// Keys are emitted in this order; entries whose source resolves to an empty
/// value are skipped.
pub const ENV_TABLE: &[EnvEntry] = &[
    entry("DOCKER_LOGIN", ValueSource::File("docker_login.file")),
    entry("DOCKER_PASSWORD", ValueSource::File("docker_credentials.file")),
    entry("AWS_ACCESS_KEY_ID", ValueSource::File("aws_access_key.file")),
    entry(
        "AWS_SECRET_ACCESS_KEY",
        ValueSource::File("aws_secret_key.file"),
    ),
    var("OPERATOR_IMAGE"),
    var("LATEST_RELEASED_IMG"),
    var("VERSION"),
    var("SNAPSHOT"),
    var("GCLOUD_PROJECT"),
    var("REGISTRY"),
    var("REPOSITORY"),
    var("IMG_SUFFIX"),
    var("GKE_CLUSTER_NAME"),
    var("TESTS_MATCH"),
    var("GKE_CLUSTER_VERSION"),
    var("STACK_VERSION"),
    var("SKIP_DOCKER_COMMAND"),
    entry("GOOGLE_APPLICATION_CREDENTIALS", ValueSource::CredentialsPath),
];

/// Render `KEY=VALUE` lines with CRLF endings, skipping empty values.
///
/// Values are emitted verbatim; a value that itself contains a newline (for
/// example a credential file ending in one) is carried through unchanged.
pub fn render_env_lines(pairs: &[(&str, String)]) -> String {
    let mut out = String::new();
    for (key, value) in pairs {
        if value.is_empty() {
            continue;
        }
        out.push_str(key);
        out.push('=');
        out.push_str(value);
        out.push_str("\r\n");
    }
    out
}
