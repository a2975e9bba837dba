//! Report sections that are not tied to a single topic.

use super::number_word;
use crate::model::Topic;

/// Report title plus the introductory overview section.
///
/// `topics` must already be in report order.
pub fn overview(number: usize, topics: &[&Topic]) -> String {
    let mut out = format!(
        r#"# C++ Singleton Scope Tutorial Report

## {number}. Overview

### What is the Singleton Pattern?

The Singleton pattern ensures a class has only **one instance** and provides a global point of access to it. In C++, this seemingly simple pattern becomes complex when considering:

- Multiple translation units (TUs)
- Dynamic shared objects (DSOs / .so files)
- Multi-threading
- Multiple processes
- Machine-wide uniqueness

### Why Does Scope Matter?

In C++, a "singleton" can have different meanings depending on the scope:

| Scope | Meaning |
|-------|---------|
| Translation Unit | One instance per .cpp file |
| Binary | One instance per executable |
| DSO | One instance per shared library |
| Thread | One instance per thread |
| Process | One instance per process (across all DSOs) |
| Machine | One instance per machine (across all processes) |

### The {count} Scope Levels

This tutorial covers {word} progressively complex scope levels:
"#,
        count = topics.len(),
        word = number_word(topics.len()),
    );

    for topic in topics {
        out.push_str(&format!(
            "\n{}. **{}** — {}",
            topic.level, topic.key, topic.summary
        ));
    }

    out
}

/// Side-by-side comparison of every topic, one row each.
pub fn comparison_table(number: usize, topics: &[&Topic]) -> String {
    let mut lines = vec![
        format!("## {}. Comparison Table", number),
        String::new(),
        "| Scope | Mechanism | Key C++ Feature | Guarantee |".to_string(),
        "|-------|-----------|-----------------|-----------|".to_string(),
    ];
    for topic in topics {
        let row = &topic.comparison;
        lines.push(format!(
            "| {} | {} | {} | {} |",
            topic.key, row.mechanism, row.feature, row.guarantee
        ));
    }
    lines.join("\n")
}

/// Common pitfalls, recommendations and the decision flow.
pub fn takeaways(number: usize) -> String {
    format!(
        r#"## {number}. Key Takeaways

### {number}.1 Common Pitfalls

| Pitfall | Consequence |
|---------|-------------|
| `static` in header | Creates per-TU copies (not singleton!) |
| Trusting `inline` across DSOs | Each .so gets its own copy |
| Forgetting `-fvisibility=hidden` | Unexpected symbol merging |
| Confusing `thread_local` with process-wide | Per-thread, not process singleton |
| Over-engineering scope level | Using os_scope when process_scope suffices |

### {number}.2 When to Use Which

| Scenario | Recommended Scope |
|----------|-------------------|
| Header-only library, single binary | `tu_scope` with `inline` |
| Plugin architecture, intentional isolation | `dso_scope` |
| Request context, per-thread state | `thread_scope` |
| Multi-DSO application, shared logger/config | `process_scope` (core_shared_lib) |
| Daemon process, prevent duplicate instances | `os_scope` |

### Quick Decision Flow

```
Do you need one instance per THREAD?
  └─ Yes → thread_scope (thread_local)
  └─ No ↓

Do you need one instance per MACHINE?
  └─ Yes → os_scope (flock)
  └─ No ↓

Do you have multiple DSOs/shared libraries?
  └─ Yes → process_scope (core_shared_lib recommended)
  └─ No ↓

Single binary with multiple TUs?
  └─ Yes → tu_scope (inline)
```"#
    )
}
