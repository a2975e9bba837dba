//! Embedded catalog of the five singleton scope levels.
//!
//! Entries are listed in level order, but the report assembler sorts by
//! `level` itself and does not depend on this ordering.

use crate::model::*;

pub const TOPICS: &[Topic] = &[
    Topic {
        level: 1,
        key: "tu_scope",
        title: "Translation Unit Scope",
        summary: "Translation Unit: `static` vs `inline`",
        problem: "Why `static` in header fails to create a true singleton",
        concept: "Each translation unit (`.cpp` file) that includes the header gets its own copy of a `static` variable. This violates the singleton pattern.",
        mechanism: "C++17 `inline` variable guarantees a single instance across the entire binary, regardless of how many TUs include the header.",
        expected_output: ExpectedOutput {
            source: Some("tu_scope/plan.md"),
            fallback: r#"[user_a] static:  0x404100
[user_a] inline:  0x404180
[user_b] static:  0x404120   <- DIFFERENT! (per-TU copy)
[user_b] inline:  0x404180   <- SAME! (per-binary singleton)"#,
        },
        comparison: ComparisonRow {
            mechanism: "ODR + linkage",
            feature: "`static` vs `inline`",
            guarantee: "Per-TU / Per-binary",
        },
        body: TopicBody::Simple {
            key_code: &[
                CodeSnippet {
                    description: "The Pitfall: `static` creates per-TU copies",
                    snippet: r#"// logger_static.hpp - WARNING: Each TU gets its own copy!
static Logger g_logger_static;

static Logger& get_logger_static() {
    return g_logger_static;
}"#,
                },
                CodeSnippet {
                    description: "The Solution: `inline` ensures one instance (C++17)",
                    snippet: r#"// logger_inline.hpp - Single instance across entire binary
inline Logger g_logger_inline;

inline Logger& get_logger_inline() {
    return g_logger_inline;
}"#,
                },
            ],
        },
    },
    Topic {
        level: 2,
        key: "dso_scope",
        title: "Dynamic Shared Object Scope",
        summary: "Dynamic Shared Object: Symbol visibility",
        problem: "Why `inline` fails across shared library (.so) boundaries",
        concept: "Each DSO (shared library) maintains its own data section. Even with `inline`, the linker treats each DSO as a separate unit, creating multiple copies.",
        mechanism: "`-fvisibility=hidden` prevents symbol merging across DSO boundaries, demonstrating that each .so has its own instance.",
        expected_output: ExpectedOutput {
            source: Some("dso_scope/plan.md"),
            fallback: r#"Logger ctor @0x7f1234...   (main's instance)
Logger ctor @0x7f5678...   (plugin_a's instance)
Logger ctor @0x7f9abc...   (plugin_b's instance)
[main]     0x7f1234...
[plugin_a] 0x7f5678...     <- DIFFERENT!
[plugin_b] 0x7f9abc...     <- DIFFERENT!"#,
        },
        comparison: ComparisonRow {
            mechanism: "Symbol visibility",
            feature: "`-fvisibility=hidden`",
            guarantee: "Per-DSO",
        },
        body: TopicBody::Simple {
            key_code: &[
                CodeSnippet {
                    description: "Header with inline variable (same for all DSOs)",
                    snippet: r#"// logger.hpp
inline Logger g_logger;

inline Logger& get_logger() { return g_logger; }"#,
                },
                CodeSnippet {
                    description: "CMake: Hide symbols to demonstrate per-DSO behavior",
                    snippet: r#"# CMakeLists.txt
target_compile_options(dso_plugin_a PRIVATE -fvisibility=hidden)
target_compile_options(dso_plugin_b PRIVATE -fvisibility=hidden)"#,
                },
                CodeSnippet {
                    description: "Plugin entry with explicit visibility",
                    snippet: r#"// libplugin_a.cpp
extern "C" __attribute__((visibility("default")))
void plugin_a_entry() {
    std::cout << "[plugin_a] logger @" << &get_logger() << "\n";
}"#,
                },
            ],
        },
    },
    Topic {
        level: 3,
        key: "thread_scope",
        title: "Thread-Local Scope",
        summary: "Thread-Local Storage: `thread_local`",
        problem: "Need per-thread singleton (orthogonal to binary/process scope)",
        concept: "Each thread gets its own instance. Within the same thread, the instance is shared across DSOs (if symbols are visible).",
        mechanism: "`thread_local` combined with `inline` creates a per-thread, cross-DSO singleton.",
        expected_output: ExpectedOutput {
            source: Some("thread_scope/plan.md"),
            fallback: r#"ThreadLogger ctor @0xAAA tid=1  (main thread)
ThreadLogger ctor @0xBBB tid=2  (worker thread)
ThreadLogger ctor @0xCCC tid=3  (worker thread)
[main]     @0xAAA tid=1
[worker 0] @0xBBB tid=2   <- Different address, different thread
[worker 1] @0xCCC tid=3   <- Different address, different thread"#,
        },
        comparison: ComparisonRow {
            mechanism: "TLS",
            feature: "`thread_local`",
            guarantee: "Per-thread",
        },
        body: TopicBody::Simple {
            key_code: &[CodeSnippet {
                description: "Per-thread singleton with cross-DSO sharing",
                snippet: r#"// thread_logger.hpp
struct ThreadLogger {
    ThreadLogger() {
        std::cout << "ThreadLogger ctor @" << this
                  << " tid=" << std::this_thread::get_id() << "\n";
    }
};

// C++17: inline thread_local - per-thread, shared across DSOs
inline thread_local ThreadLogger g_thread_logger;

inline ThreadLogger& get_thread_logger() {
    return g_thread_logger;
}"#,
            }],
        },
    },
    Topic {
        level: 4,
        key: "process_scope",
        title: "Process Scope",
        summary: "Process-wide: 4 practical patterns",
        problem: "Guarantee ONE instance across all DSOs in a process",
        concept: "Multiple strategies exist to achieve a true process-wide singleton that all DSOs can share.",
        mechanism: "Four approaches: core library, symbol export, runtime lookup, or shared memory.",
        expected_output: ExpectedOutput {
            source: None,
            fallback: r#"[main] logger @0x7f1234...
[libA] logger @0x7f1234...  <- SAME!
[libB] logger @0x7f1234...  <- SAME!
[libC] logger @0x7f1234...  <- SAME!"#,
        },
        comparison: ComparisonRow {
            mechanism: "Various (4 variants)",
            feature: "Linker/dlsym/shm",
            guarantee: "Per-process",
        },
        body: TopicBody::Variants(&[
            Variant {
                title: "Core Shared Library (Recommended)",
                concept: "Central library owns the singleton; all other DSOs link to it.",
                key_code: &[
                    CodeSnippet {
                        description: "Singleton lives in dedicated core library",
                        snippet: r#"// core_api.cpp - THE singleton instance lives here
static ProcessLogger g_logger("core_shared_lib");

ProcessLogger& get_process_logger() {
    return g_logger;
}

// core_api.hpp
ProcessLogger& get_process_logger();"#,
                    },
                    CodeSnippet {
                        description: "All DSOs link to core library",
                        snippet: r#"# CMakeLists.txt
add_library(process_core SHARED core_api.cpp)
target_link_libraries(process_libA PRIVATE process_core)
target_link_libraries(process_libB PRIVATE process_core)"#,
                    },
                ],
                pros: "Most straightforward, linker handles resolution, cross-platform",
                cons: "Requires extra library",
            },
            Variant {
                title: "Main Executable Owner",
                concept: "Executable owns singleton; exports symbol for DSOs to find via `--export-dynamic`.",
                key_code: &[
                    CodeSnippet {
                        description: "Main exports singleton getter",
                        snippet: r#"// main.cpp - THE singleton instance lives here
static ProcessLogger g_logger("main_owner");

extern "C" ProcessLogger& get_process_logger() {
    return g_logger;
}"#,
                    },
                    CodeSnippet {
                        description: "Linker flag to export main's symbols",
                        snippet: r#"# CMakeLists.txt
target_link_options(main_owner_demo PRIVATE "-Wl,--export-dynamic")"#,
                    },
                ],
                pros: "No extra library, main is clearly central",
                cons: "Platform-specific linker flags, security exposure",
            },
            Variant {
                title: "dlsym Runtime Lookup",
                concept: "DSOs find singleton at runtime via `dlsym(RTLD_DEFAULT, ...)`.",
                key_code: &[CodeSnippet {
                    description: "Runtime symbol resolution",
                    snippet: r#"// dso_common.cpp
#include <dlfcn.h>

using GetLoggerFn = ProcessLogger& (*)();

ProcessLogger& get_logger_via_dlsym() {
    static GetLoggerFn fn = nullptr;
    if (!fn) {
        // RTLD_DEFAULT: search all loaded shared objects
        void* sym = dlsym(RTLD_DEFAULT, "get_process_logger");
        if (!sym) {
            throw std::runtime_error("get_process_logger not found");
        }
        fn = reinterpret_cast<GetLoggerFn>(sym);
    }
    return (*fn)();
}"#,
                }],
                pros: "True late binding, flexible plugin loading",
                cons: "Complex debugging, runtime overhead, error handling required",
            },
            Variant {
                title: "Shared Memory",
                concept: "Kernel-backed shared memory with placement new for cross-process potential.",
                key_code: &[CodeSnippet {
                    description: "shm_open + mmap + placement new",
                    snippet: r#"// shm_logger.cpp
#include <sys/mman.h>
#include <fcntl.h>

static const char* SHM_NAME = "/process_scope_logger";

ProcessLogger& get_shm_logger() {
    static ShmBlock* g_block = nullptr;
    static std::once_flag g_init_flag;

    std::call_once(g_init_flag, []() {
        int fd = shm_open(SHM_NAME, O_CREAT | O_RDWR, 0666);
        ftruncate(fd, sizeof(ShmBlock));

        void* addr = mmap(nullptr, sizeof(ShmBlock),
                          PROT_READ | PROT_WRITE, MAP_SHARED, fd, 0);
        close(fd);

        g_block = static_cast<ShmBlock*>(addr);

        // One-time initialization using atomic flag
        bool expected = false;
        if (g_block->initialized.compare_exchange_strong(expected, true)) {
            new (g_block->storage) ProcessLogger("shared_memory");
        }
    });

    return *reinterpret_cast<ProcessLogger*>(g_block->storage);
}"#,
                }],
                pros: "Can extend to cross-process, no symbol visibility issues",
                cons: "Complex, cleanup required, POSIX-specific",
            },
        ]),
    },
    Topic {
        level: 5,
        key: "os_scope",
        title: "OS (Machine-Wide) Scope",
        summary: "Machine-wide: Kernel locks",
        problem: "Ensure only ONE process instance runs on the entire machine",
        concept: "Use kernel-level locking to prevent duplicate process instances. Common for daemon processes.",
        mechanism: "`flock()` with exclusive non-blocking lock on a lock file in `/tmp`.",
        expected_output: ExpectedOutput {
            source: Some("os_scope/plan.md"),
            fallback: r#"Terminal 1:
$ ./os_scope_demo
Lock acquired! This is the singleton instance.
Press Enter to release lock and exit...

Terminal 2 (simultaneously):
$ ./os_scope_demo
Another instance is already running!"#,
        },
        comparison: ComparisonRow {
            mechanism: "Kernel lock",
            feature: "`flock()`",
            guarantee: "Per-machine",
        },
        body: TopicBody::Simple {
            key_code: &[CodeSnippet {
                description: "flock with LOCK_EX | LOCK_NB for exclusive non-blocking lock",
                snippet: r#"// singleton_daemon.cpp
#include <sys/file.h>
#include <fcntl.h>
#include <unistd.h>

constexpr const char* LOCK_FILE = "/tmp/os_scope_singleton.lock";

int main() {
    int fd = open(LOCK_FILE, O_CREAT | O_RDWR, 0666);
    if (fd < 0) {
        std::cerr << "Failed to open lock file\n";
        return 1;
    }

    // Try to acquire exclusive lock (non-blocking)
    if (flock(fd, LOCK_EX | LOCK_NB) < 0) {
        if (errno == EWOULDBLOCK) {
            std::cerr << "Another instance is already running!\n";
        }
        close(fd);
        return 1;
    }

    // Lock acquired - we are the singleton
    std::cout << "Lock acquired! This is the singleton instance.\n";

    // ... do work ...

    close(fd);  // Lock auto-released
    return 0;
}"#,
            }],
        },
    },
];
