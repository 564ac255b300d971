use tscriptify_core::go_string_literal;

use super::DriverConfig;
use crate::builder::{CodeBuilder, CodeFragment, Renderable};

/// Import path of the Go library that performs the conversion.
pub const TYPESCRIPTIFY_IMPORT: &str = "github.com/tkrajina/typescriptify-golang-structs/typescriptify";

/// Source text of one driver program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesizedProgram {
    source: String,
}

impl SynthesizedProgram {
    /// Get the Go source.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn into_source(self) -> String {
        self.source
    }
}

/// Renders the Go driver program for a [`DriverConfig`].
///
/// Rendering is pure: the same configuration always yields the same text.
pub struct DriverSynthesizer<'a> {
    config: &'a DriverConfig,
}

impl<'a> DriverSynthesizer<'a> {
    pub fn new(config: &'a DriverConfig) -> Self {
        Self { config }
    }

    pub fn render(&self) -> SynthesizedProgram {
        let mut builder = CodeBuilder::go().line("package main").blank();
        builder
            .emit(&ImportBlock(self.config))
            .push_blank()
            .emit(&MainFunction(self.config))
            .push_blank()
            .emit(&EnumHelpers);

        tracing::debug!(
            packages = self.config.packages().len(),
            structs = self.config.structs().len(),
            "rendered driver program"
        );
        SynthesizedProgram {
            source: builder.build(),
        }
    }
}

/// `import ( ... )` with the aliased model packages, the library and any
/// caller-supplied imports.
struct ImportBlock<'a>(&'a DriverConfig);

impl Renderable for ImportBlock<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut body: Vec<CodeFragment> = self
            .0
            .packages()
            .iter()
            .map(|pkg| {
                CodeFragment::line(format!("{pkg} {}", go_string_literal(pkg.import_path())))
            })
            .collect();
        body.push(CodeFragment::line(go_string_literal(TYPESCRIPTIFY_IMPORT)));
        body.extend(CodeFragment::verbatim(self.0.extra_imports()));

        vec![CodeFragment::block("import (", body, Some(")".to_string()))]
    }
}

struct MainFunction<'a>(&'a DriverConfig);

impl MainFunction<'_> {
    fn setup(&self) -> CodeFragment {
        let config = self.0;
        let mut lines = vec![
            CodeFragment::line("t := typescriptify.New()"),
            CodeFragment::line(format!("t.CreateInterface = {}", config.create_interface())),
        ];
        lines.extend(
            config
                .init_params()
                .map(|(field, literal)| CodeFragment::line(format!("t.{field} = {literal}"))),
        );
        lines.extend(
            config
                .structs()
                .iter()
                .map(|s| CodeFragment::line(format!("t.Add({s}{{}})"))),
        );
        lines.extend(config.custom_imports().map(|import| {
            CodeFragment::line(format!("t.AddImport({})", go_string_literal(import)))
        }));
        CodeFragment::Sequence(lines)
    }

    fn convert(&self) -> CodeFragment {
        CodeFragment::Sequence(vec![
            CodeFragment::line(format!(
                "err := t.ConvertToFile({})",
                go_string_literal(self.0.target_file())
            )),
            CodeFragment::braced(
                "if err != nil {",
                vec![CodeFragment::line("panic(err.Error())")],
            ),
        ])
    }
}

impl Renderable for MainFunction<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut body = vec![self.setup()];
        body.extend(CodeFragment::verbatim(self.0.extra_commands()));
        body.push(self.convert());

        vec![CodeFragment::braced("func main() {", body)]
    }
}

/// Generic helpers available to extra commands for registering string enums.
struct EnumHelpers;

impl Renderable for EnumHelpers {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![
            CodeFragment::braced(
                "type enum[T any] struct {",
                vec![
                    CodeFragment::line("Value  T"),
                    CodeFragment::line("TSName string"),
                ],
            ),
            CodeFragment::Blank,
            CodeFragment::braced(
                "func stringEnum[T ~string](xs []T) []enum[T] {",
                vec![
                    CodeFragment::line("out := make([]enum[T], 0, len(xs))"),
                    CodeFragment::braced(
                        "for _, x := range xs {",
                        vec![CodeFragment::block(
                            "out = append(out, enum[T]{",
                            vec![
                                CodeFragment::line("Value:  x,"),
                                CodeFragment::line("TSName: string(x),"),
                            ],
                            Some("})".to_string()),
                        )],
                    ),
                    CodeFragment::line("return out"),
                ],
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::generation::{PackageAliasResolver, StructReference};

    fn render(config: &DriverConfig) -> String {
        DriverSynthesizer::new(config).render().into_source()
    }

    #[test]
    fn test_minimal_program() {
        let config = DriverConfig::builder("out.ts").build();
        let source = render(&config);

        assert!(source.starts_with("package main\n\nimport (\n"));
        assert!(source.contains(
            "\t\"github.com/tkrajina/typescriptify-golang-structs/typescriptify\"\n)\n"
        ));
        assert!(source.contains("\tt := typescriptify.New()\n\tt.CreateInterface = false\n"));
        assert!(source.contains("\terr := t.ConvertToFile(\"out.ts\")\n"));
        assert!(source.contains("\tif err != nil {\n\t\tpanic(err.Error())\n\t}\n}\n"));
        assert!(!source.contains("t.Add("));
    }

    #[test]
    fn test_shared_directory_yields_one_import() {
        let mut resolver = PackageAliasResolver::new("github.com/acme/shop");
        let user = resolver.resolve(Path::new("models/user.go"));
        let order = resolver.resolve(Path::new("models/order.go"));
        let config = DriverConfig::builder("out.ts")
            .structs([
                StructReference::qualified(user, "User"),
                StructReference::qualified(order, "Order"),
            ])
            .packages(resolver.into_aliases())
            .build();

        let source = render(&config);

        assert_eq!(source.matches("\"github.com/acme/shop/models\"").count(), 1);
        assert!(source.contains("\tm0 \"github.com/acme/shop/models\"\n"));
        assert_eq!(source.matches("t.Add(").count(), 2);
        assert!(source.contains("\tt.Add(m0.User{})\n\tt.Add(m0.Order{})\n"));
    }

    #[test]
    fn test_strings_are_escaped() {
        let config = DriverConfig::builder("C:\\out\\models.ts")
            .backup_dir("say \"hi\"")
            .custom_import("import { X } from \"x\"")
            .build();

        let source = render(&config);

        assert!(source.contains("t.ConvertToFile(\"C:\\\\out\\\\models.ts\")"));
        assert!(source.contains("\tt.BackupDir = \"say \\\"hi\\\"\"\n"));
        assert!(source.contains("\tt.AddImport(\"import { X } from \\\"x\\\"\")\n"));
    }

    #[test]
    fn test_extra_text_is_spliced_verbatim() {
        let config = DriverConfig::builder("out.ts")
            .extra_imports("\t\"time\"")
            .extra_commands("\tt.AddEnum(stringEnum([]string{\"a\"}))\n")
            .build();

        let source = render(&config);

        assert!(source.contains("typescriptify\"\n\t\"time\"\n)\n"));
        assert!(source.contains(
            "\tt.AddEnum(stringEnum([]string{\"a\"}))\n\terr := t.ConvertToFile(\"out.ts\")\n"
        ));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let config = DriverConfig::builder("out.ts")
            .init_param("Prefix", "\"I\"")
            .backup_dir("b")
            .structs([StructReference::direct("Money")])
            .build();

        assert_eq!(render(&config), render(&config));
        let source = render(&config);
        let backup = source.find("t.BackupDir").unwrap();
        let prefix = source.find("t.Prefix").unwrap();
        assert!(backup < prefix);
    }
}
