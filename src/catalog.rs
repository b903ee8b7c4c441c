use crate::config::{Rule, RuleExamples, Severity};

/// Built-in rule catalog, in the order the editor lists rules.
///
/// Recommended rules start turned on at `error`, matching how
/// `eslint:recommended` ships; the rest start off at `warn` until the user
/// opts in.
pub fn builtin_rules() -> Vec<Rule> {
    vec![
        Rule {
            name: "eqeqeq".into(),
            short_description: "Require the use of === and !==".into(),
            long_description: "Type-converting equality operators (== and !=) coerce their \
                operands before comparing, which produces surprising results like \
                [] == false. The strict operators compare without coercion."
                .into(),
            class_name: "rule-eqeqeq".into(),
            is_recommended: false,
            is_fixable: true,
            is_turned_on: false,
            value: Severity::Warn,
            examples: RuleExamples {
                correct: Some("if (x === 21) {\n  run();\n}".into()),
                incorrect: Some("if (x == 21) {\n  run();\n}".into()),
            },
        },
        Rule {
            name: "no-console".into(),
            short_description: "Disallow the use of console".into(),
            long_description: "Calls to console methods are usually leftover debugging and \
                should not ship to production. Route diagnostics through a logger that can \
                be silenced per environment instead."
                .into(),
            class_name: "rule-no-console".into(),
            is_recommended: false,
            is_fixable: false,
            is_turned_on: false,
            value: Severity::Warn,
            examples: RuleExamples {
                correct: Some("logger.info(\"pages loaded\");".into()),
                incorrect: Some("console.log(\"pages loaded\");".into()),
            },
        },
        Rule {
            name: "no-debugger".into(),
            short_description: "Disallow the use of debugger".into(),
            long_description: "A debugger statement halts execution whenever developer tools \
                are open. It only makes sense on a developer's machine and must never reach \
                committed code."
                .into(),
            class_name: "rule-no-debugger".into(),
            is_recommended: true,
            is_fixable: false,
            is_turned_on: true,
            value: Severity::Error,
            examples: RuleExamples {
                correct: Some("function isTruthy(x) {\n  return Boolean(x);\n}".into()),
                incorrect: Some("function isTruthy(x) {\n  debugger;\n  return Boolean(x);\n}".into()),
            },
        },
        Rule {
            name: "no-empty".into(),
            short_description: "Disallow empty block statements".into(),
            long_description: "An empty block usually marks unfinished work: a swallowed \
                exception, a forgotten branch. Blocks that are intentionally empty should \
                carry a comment saying so."
                .into(),
            class_name: "rule-no-empty".into(),
            is_recommended: true,
            is_fixable: false,
            is_turned_on: true,
            value: Severity::Error,
            examples: RuleExamples {
                correct: Some("try {\n  work();\n} catch (e) {\n  // ignored: best effort\n}".into()),
                incorrect: Some("try {\n  work();\n} catch (e) {}".into()),
            },
        },
        Rule {
            name: "no-unused-vars".into(),
            short_description: "Disallow unused variables".into(),
            long_description: "Variables that are declared but never read are almost always \
                refactoring leftovers. They widen the file for no benefit and mislead \
                readers about what the code depends on."
                .into(),
            class_name: "rule-no-unused-vars".into(),
            is_recommended: true,
            is_fixable: false,
            is_turned_on: true,
            value: Severity::Error,
            examples: RuleExamples {
                correct: Some("const total = price * count;\nreturn total;".into()),
                incorrect: Some("const total = price * count;\nreturn price;".into()),
            },
        },
        Rule {
            name: "no-var".into(),
            short_description: "Require let or const instead of var".into(),
            long_description: "var declarations are function-scoped and hoisted, so a \
                variable is visible before the line that declares it. Block-scoped let and \
                const behave the way the code reads."
                .into(),
            class_name: "rule-no-var".into(),
            is_recommended: false,
            is_fixable: true,
            is_turned_on: false,
            value: Severity::Warn,
            examples: RuleExamples {
                correct: Some("let count = people.length;".into()),
                incorrect: Some("var count = people.length;".into()),
            },
        },
        Rule {
            name: "prefer-const".into(),
            short_description: "Require const for never-reassigned bindings".into(),
            long_description: "When a let binding is never reassigned, declaring it const \
                tells the reader the value is fixed for the rest of the scope."
                .into(),
            class_name: "rule-prefer-const".into(),
            is_recommended: false,
            is_fixable: true,
            is_turned_on: false,
            value: Severity::Warn,
            examples: RuleExamples {
                correct: Some("const pi = 3.14159;".into()),
                incorrect: Some("let pi = 3.14159;".into()),
            },
        },
        Rule {
            name: "semi".into(),
            short_description: "Require semicolons".into(),
            long_description: "Automatic semicolon insertion guesses where statements end, \
                and its guesses differ from what most readers expect around return values \
                and template literals. Explicit semicolons remove the guessing."
                .into(),
            class_name: "rule-semi".into(),
            is_recommended: false,
            is_fixable: true,
            is_turned_on: false,
            value: Severity::Warn,
            examples: RuleExamples {
                correct: Some("const name = \"ESLint\";".into()),
                incorrect: Some("const name = \"ESLint\"".into()),
            },
        },
    ]
}
