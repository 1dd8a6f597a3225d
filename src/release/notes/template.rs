//! Release notes template.

/// Markdown layout for `RELEASE_NOTES_v<version>.md`.
pub const RELEASE_NOTES_TEMPLATE: &str = r#"# {{product_name}} v{{version}}

## Release Type: {{release_kind}}

## Installation

### New Users
Download and run `{{file_name}}`

### Existing Users
- **Automatic**: Application will notify you of the update
- **Manual**: Download and run the installer
{{#if from_version}}
This patch applies over version {{from_version}}.
{{/if}}
## File Information

**Filename**: {{file_name}}
**Size**: {{size}} bytes
**Checksum**: {{checksum}}

## Changelog

_Add the detailed changelog here._

## Manifest Entry

Add to your `update_manifest.json`:

```json
{{manifest_snippet}}
```

## Verification

Verify download integrity:

```powershell
Get-FileHash -Algorithm SHA256 "{{file_name}}"
```

Expected: `{{checksum_hex}}`

## Links

- [Download]({{url}})
- [Documentation]({{homepage_url}})
- [Report Issues]({{issues_url}})
"#;
