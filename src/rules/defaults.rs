//! Built-in rule content.
//!
//! Shipped as embedded JSON so the defaults flow through the same
//! deserialization and compilation path as externally supplied rule
//! documents. File heuristics target well known credential-carrying
//! filenames; line heuristics target token shapes with distinctive
//! prefixes. Neither list pretends to be exhaustive.

/// Filename-level heuristics.
pub const FILE_RULES_JSON: &str = r#"
[
    {
        "part": "extension",
        "type": "match",
        "pattern": "pem",
        "caption": "Potential cryptographic private key"
    },
    {
        "part": "extension",
        "type": "match",
        "pattern": "asc",
        "caption": "Potential cryptographic private key"
    },
    {
        "part": "extension",
        "type": "match",
        "pattern": "ppk",
        "caption": "Potential PuTTY private key"
    },
    {
        "part": "extension",
        "type": "match",
        "pattern": "pkcs12",
        "caption": "Potential cryptographic key bundle"
    },
    {
        "part": "extension",
        "type": "match",
        "pattern": "pfx",
        "caption": "Potential cryptographic key bundle"
    },
    {
        "part": "extension",
        "type": "match",
        "pattern": "p12",
        "caption": "Potential cryptographic key bundle"
    },
    {
        "part": "extension",
        "type": "regex",
        "pattern": "^key(pair)?$",
        "caption": "Potential cryptographic private key"
    },
    {
        "part": "filename",
        "type": "regex",
        "pattern": "^id_(rsa|dsa|ecdsa|ed25519)$",
        "caption": "SSH private key"
    },
    {
        "part": "filename",
        "type": "match",
        "pattern": "otr.private_key",
        "caption": "Pidgin OTR private key"
    },
    {
        "part": "filename",
        "type": "regex",
        "pattern": "^\\.?(bash_|zsh_|sh_|z)?history$",
        "caption": "Shell command history file"
    },
    {
        "part": "filename",
        "type": "regex",
        "pattern": "^\\.?mysql_history$",
        "caption": "MySQL client command history file"
    },
    {
        "part": "filename",
        "type": "regex",
        "pattern": "^\\.?psql_history$",
        "caption": "PostgreSQL client command history file"
    },
    {
        "part": "filename",
        "type": "regex",
        "pattern": "^\\.?irb_history$",
        "caption": "Ruby IRB console history file"
    },
    {
        "part": "filename",
        "type": "regex",
        "pattern": "^\\.?pgpass$",
        "caption": "PostgreSQL password file"
    },
    {
        "part": "filename",
        "type": "regex",
        "pattern": "^\\.?netrc$",
        "caption": "Network service credentials file"
    },
    {
        "part": "filename",
        "type": "regex",
        "pattern": "^\\.?htpasswd$",
        "caption": "Apache htpasswd file"
    },
    {
        "part": "filename",
        "type": "regex",
        "pattern": "^\\.?git-credentials$",
        "caption": "Git credential store file"
    },
    {
        "part": "filename",
        "type": "regex",
        "pattern": "^\\.?npmrc$",
        "caption": "NPM configuration file, may contain registry tokens"
    },
    {
        "part": "filename",
        "type": "regex",
        "pattern": "^\\.?dockercfg$",
        "caption": "Docker registry authentication file"
    },
    {
        "part": "filename",
        "type": "regex",
        "pattern": "^\\.?s3cfg$",
        "caption": "S3cmd configuration file"
    },
    {
        "part": "filename",
        "type": "regex",
        "pattern": "^\\.?env$",
        "caption": "Environment configuration file"
    },
    {
        "part": "filename",
        "type": "regex",
        "pattern": "^\\.?dbeaver-data-sources\\.xml$",
        "caption": "DBeaver database connection configuration"
    },
    {
        "part": "filename",
        "type": "regex",
        "pattern": "^secret_token\\.rb$",
        "caption": "Ruby on Rails secret token configuration"
    },
    {
        "part": "path",
        "type": "regex",
        "pattern": "\\.?aws/credentials$",
        "caption": "AWS CLI credentials file"
    },
    {
        "part": "filename",
        "type": "regex",
        "pattern": "credential",
        "caption": "Filename contains the word 'credential'"
    },
    {
        "part": "filename",
        "type": "regex",
        "pattern": "password",
        "caption": "Filename contains the word 'password'"
    }
]
"#;

/// Line-content heuristics.
pub const LINE_RULES_JSON: &str = r#"
[
    {
        "pattern": "-----BEGIN \\S+ PRIVATE KEY-----",
        "caption": "Possible private key data"
    },
    {
        "pattern": "(xox[pboa]-[0-9]{12}-[0-9]{12}-[0-9]{12}-[a-z0-9]{32})",
        "caption": "Possible Slack API token"
    },
    {
        "pattern": "AKIA[0-9A-Z]{16}",
        "caption": "Possible AWS Access Key"
    }
]
"#;
