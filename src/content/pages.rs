// SPDX-License-Identifier: MPL-2.0
//! The eight documentation pages.

use super::{
    Action, Block, Callout, Cell, CodeSample, Feature, FeatureIcon, Label, LinkTarget, ListItem,
    Page, Release, Section, Tab, Table, Tone,
};
use crate::config::REPOSITORY_URL;
use crate::navigation::Route;

const INSTALL_SH: &str =
    "curl -fsSL https://raw.githubusercontent.com/TheMagicTower/summon/master/install.sh | bash";

const fn code(code: &'static str, language: &'static str) -> Block {
    Block::Code(CodeSample {
        code,
        language: Some(language),
        title: None,
    })
}

const fn titled(code: &'static str, language: &'static str, title: Label) -> Block {
    Block::Code(CodeSample {
        code,
        language: Some(language),
        title: Some(title),
    })
}

// ============================================================================
// Home
// ============================================================================

pub(super) static HOME: Page = Page {
    route: Route::Home,
    title_key: "home.title",
    description_key: "home.description",
    sections: &[
        Section {
            id: "hero",
            heading: None,
            blocks: &[Block::Actions(&[
                Action {
                    label: Label::Key("home.getStarted"),
                    target: LinkTarget::Route(Route::Installation),
                    primary: true,
                },
                Action {
                    label: Label::Literal("GitHub"),
                    target: LinkTarget::External(REPOSITORY_URL),
                    primary: false,
                },
            ])],
        },
        Section {
            id: "architecture",
            heading: Some(Label::Key("home.architecture")),
            blocks: &[code(
                r#"Claude Code CLI
  │ ANTHROPIC_BASE_URL=http://127.0.0.1:18081
  ▼
Summon (Reverse Proxy)
  ├─ /v1/messages POST → model field → routing
  │   ├─ match → External Provider (header/auth swap)
  │   └─ no match → Anthropic API (passthrough)
  └─ Other requests → Anthropic API (passthrough)"#,
                "text",
            )],
        },
        Section {
            id: "quick-start",
            heading: Some(Label::Key("home.quickStart")),
            blocks: &[
                titled(INSTALL_SH, "bash", Label::Key("home.install")),
                titled(
                    r#"# Start proxy
summon

# Connect Claude Code
ANTHROPIC_BASE_URL=http://127.0.0.1:18081 claude"#,
                    "bash",
                    Label::Key("home.run"),
                ),
            ],
        },
        Section {
            id: "features",
            heading: Some(Label::Key("home.features")),
            blocks: &[Block::Features(&[
                Feature {
                    icon: FeatureIcon::Routing,
                    title_key: "home.feature.routing.title",
                    description_key: "home.feature.routing.desc",
                },
                Feature {
                    icon: FeatureIcon::Shield,
                    title_key: "home.feature.auth.title",
                    description_key: "home.feature.auth.desc",
                },
                Feature {
                    icon: FeatureIcon::Zap,
                    title_key: "home.feature.streaming.title",
                    description_key: "home.feature.streaming.desc",
                },
                Feature {
                    icon: FeatureIcon::Refresh,
                    title_key: "home.feature.transparent.title",
                    description_key: "home.feature.transparent.desc",
                },
            ])],
        },
    ],
};

// ============================================================================
// Installation
// ============================================================================

pub(super) static INSTALLATION: Page = Page {
    route: Route::Installation,
    title_key: "installation.title",
    description_key: "installation.description",
    sections: &[
        Section {
            id: "one-line",
            heading: Some(Label::Key("installation.oneLine.title")),
            blocks: &[Block::Tabs(&[
                Tab {
                    label: "Linux / macOS",
                    blocks: &[code(INSTALL_SH, "bash")],
                },
                Tab {
                    label: "Windows",
                    blocks: &[code(
                        "irm https://raw.githubusercontent.com/TheMagicTower/summon/master/install.ps1 | iex",
                        "powershell",
                    )],
                },
                Tab {
                    label: "WSL",
                    blocks: &[
                        Block::Paragraph("installation.oneLine.wslNote"),
                        code(INSTALL_SH, "bash"),
                    ],
                },
            ])],
        },
        Section {
            id: "binary",
            heading: Some(Label::Key("installation.binary.title")),
            blocks: &[
                Block::Paragraph("installation.binary.description"),
                Block::Table(Table {
                    headers: &["installation.binary.platform", "installation.binary.file"],
                    rows: &[
                        &[
                            Cell::Literal("Linux x86_64"),
                            Cell::Code("summon-linux-amd64.tar.gz"),
                        ],
                        &[
                            Cell::Literal("Linux ARM64"),
                            Cell::Code("summon-linux-arm64.tar.gz"),
                        ],
                        &[
                            Cell::Literal("macOS Intel"),
                            Cell::Code("summon-darwin-amd64.tar.gz"),
                        ],
                        &[
                            Cell::Literal("macOS Apple Silicon"),
                            Cell::Code("summon-darwin-arm64.tar.gz"),
                        ],
                        &[
                            Cell::Literal("Windows x86_64"),
                            Cell::Code("summon-windows-amd64.zip"),
                        ],
                        &[
                            Cell::Literal("Windows ARM64"),
                            Cell::Code("summon-windows-arm64.zip"),
                        ],
                    ],
                }),
                titled(
                    r#"# Example: macOS Apple Silicon
tar xzf summon-darwin-arm64.tar.gz
chmod +x summon-darwin-arm64
sudo mv summon-darwin-arm64 /usr/local/bin/summon"#,
                    "bash",
                    Label::Key("installation.binary.example"),
                ),
            ],
        },
        Section {
            id: "source",
            heading: Some(Label::Key("installation.source.title")),
            blocks: &[
                Block::Paragraph("installation.source.description"),
                code(
                    r#"git clone https://github.com/TheMagicTower/summon.git
cd summon
cargo build --release
sudo cp target/release/summon /usr/local/bin/"#,
                    "bash",
                ),
            ],
        },
    ],
};

// ============================================================================
// Configuration
// ============================================================================

pub(super) static CONFIGURATION: Page = Page {
    route: Route::Configuration,
    title_key: "configuration.title",
    description_key: "configuration.description",
    sections: &[
        Section {
            id: "location",
            heading: Some(Label::Key("configuration.location.title")),
            blocks: &[
                Block::Paragraph("configuration.location.description"),
                Block::Table(Table {
                    headers: &[
                        "configuration.location.priority",
                        "configuration.location.path",
                        "configuration.location.desc",
                    ],
                    rows: &[
                        &[
                            Cell::Literal("1"),
                            Cell::Code("--config <path>"),
                            Cell::Key("configuration.location.explicit"),
                        ],
                        &[
                            Cell::Literal("2"),
                            Cell::Code("SUMMON_CONFIG"),
                            Cell::Key("configuration.location.envVar"),
                        ],
                        &[
                            Cell::Literal("3"),
                            Cell::Code("~/.config/summon/config.yaml"),
                            Cell::Key("configuration.location.user"),
                        ],
                        &[
                            Cell::Literal("4"),
                            Cell::Code("/etc/summon/config.yaml"),
                            Cell::Key("configuration.location.system"),
                        ],
                        &[
                            Cell::Literal("5"),
                            Cell::Code("./config.yaml"),
                            Cell::Key("configuration.location.cwd"),
                        ],
                    ],
                }),
            ],
        },
        Section {
            id: "structure",
            heading: Some(Label::Key("configuration.structure.title")),
            blocks: &[titled(
                r#"server:
  host: "127.0.0.1"    # Bind address (127.0.0.1 only for security)
  port: 18081          # Proxy port

# Default upstream (non-routed models + all non-message requests)
default:
  url: "https://api.anthropic.com"

# Model-based routing rules
routes:
  - match: "kimi"                          # Substring match on model field
    upstream:
      url: "https://api.kimi.com/coding"
      auth:
        header: "Authorization"
        value: "Bearer ${KIMI_API_KEY}"   # Environment variable reference

  - match: "glm"
    upstream:
      url: "https://api.z.ai/api/anthropic"
      auth:
        header: "x-api-key"
        value: "${Z_AI_API_KEY}""#,
                "yaml",
                Label::Literal("config.yaml"),
            )],
        },
        Section {
            id: "fields",
            heading: Some(Label::Key("configuration.fields.title")),
            blocks: &[
                Block::Subheading(Label::Literal("server")),
                Block::Paragraph("configuration.fields.server"),
                Block::Subheading(Label::Literal("default")),
                Block::Paragraph("configuration.fields.default"),
                Block::Subheading(Label::Literal("routes")),
                Block::Paragraph("configuration.fields.routes"),
                Block::List(&[
                    ListItem::Field {
                        code: "match",
                        key: "configuration.fields.match",
                    },
                    ListItem::Field {
                        code: "upstream.url",
                        key: "configuration.fields.upstreamUrl",
                    },
                    ListItem::Field {
                        code: "upstream.auth.header",
                        key: "configuration.fields.authHeader",
                    },
                    ListItem::Field {
                        code: "upstream.auth.value",
                        key: "configuration.fields.authValue",
                    },
                ]),
            ],
        },
        Section {
            id: "env",
            heading: Some(Label::Key("configuration.env.title")),
            blocks: &[
                Block::Paragraph("configuration.env.description"),
                code(
                    r#"# Set API keys as environment variables
export KIMI_API_KEY="your-kimi-key"
export Z_AI_API_KEY="your-z-ai-key"

# Reference in config.yaml with ${VAR_NAME} syntax
# value: "Bearer ${KIMI_API_KEY}""#,
                    "bash",
                ),
            ],
        },
    ],
};

// ============================================================================
// Usage
// ============================================================================

const CLAUDE_SETTINGS: Label = Label::Literal("~/.claude/settings.json");

pub(super) static USAGE: Page = Page {
    route: Route::Usage,
    title_key: "usage.title",
    description_key: "usage.description",
    sections: &[
        Section {
            id: "basic",
            heading: Some(Label::Key("usage.basic.title")),
            blocks: &[code(
                r#"# Start with auto-detected config
summon

# Start with explicit config path
summon --config /path/to/config.yaml

# Start with environment variable
SUMMON_CONFIG=/path/to/config.yaml summon"#,
                "bash",
            )],
        },
        Section {
            id: "claude-code",
            heading: Some(Label::Key("usage.claudeCode.title")),
            blocks: &[
                Block::Paragraph("usage.claudeCode.description"),
                titled(
                    r#"# Terminal 1: Start proxy
summon

# Terminal 2: Connect Claude Code
ANTHROPIC_BASE_URL=http://127.0.0.1:18081 claude"#,
                    "bash",
                    Label::Key("usage.claudeCode.manual"),
                ),
                Block::Subheading(Label::Key("usage.claudeCode.auto.title")),
                Block::Paragraph("usage.claudeCode.auto.description"),
                titled(
                    r#"{
  "env": {
    "ANTHROPIC_BASE_URL": "http://127.0.0.1:18081"
  }
}"#,
                    "json",
                    CLAUDE_SETTINGS,
                ),
            ],
        },
        Section {
            id: "model-binding",
            heading: Some(Label::Key("usage.modelBinding.title")),
            blocks: &[
                Block::Paragraph("usage.modelBinding.description"),
                titled(
                    r#"{
  "env": {
    "ANTHROPIC_BASE_URL": "http://127.0.0.1:18081",
    "ANTHROPIC_DEFAULT_HAIKU_MODEL": "glm-4.7",
    "ANTHROPIC_DEFAULT_SONNET_MODEL": "kimi-for-coding"
  }
}"#,
                    "json",
                    CLAUDE_SETTINGS,
                ),
            ],
        },
        Section {
            id: "cli",
            heading: Some(Label::Key("usage.cli.title")),
            blocks: &[
                Block::Paragraph("usage.cli.description"),
                Block::Subheading(Label::Key("usage.cli.update.title")),
                Block::Paragraph("usage.cli.update.description"),
                code("summon update", "bash"),
                Block::Subheading(Label::Key("usage.cli.commands.title")),
                Block::Paragraph("usage.cli.commands.description"),
                code(
                    r#"summon status          # Show current status
summon enable          # Enable proxy
summon disable         # Disable proxy
summon start           # Start proxy in background
summon stop            # Stop proxy
summon add             # Add a provider route
summon remove          # Remove a provider route
summon restore         # Restore settings backup"#,
                    "bash",
                ),
                Block::Subheading(Label::Key("usage.cli.configure.title")),
                Block::Paragraph("usage.cli.configure.description"),
                code("summon configure", "bash"),
            ],
        },
        Section {
            id: "wsl",
            heading: Some(Label::Key("usage.wsl.title")),
            blocks: &[
                Block::Paragraph("usage.wsl.description"),
                Block::Subheading(Label::Key("usage.wsl.inside.title")),
                code(
                    r#"# WSL terminal 1
summon

# WSL terminal 2
ANTHROPIC_BASE_URL=http://127.0.0.1:18081 claude"#,
                    "bash",
                ),
                Block::Subheading(Label::Key("usage.wsl.outside.title")),
                code(
                    r#"# WSL: start summon
summon

# Windows PowerShell:
$env:ANTHROPIC_BASE_URL="http://$(wsl hostname -I | ForEach-Object { $_.Trim() }):18081"; claude"#,
                    "bash",
                ),
            ],
        },
    ],
};

// ============================================================================
// Providers
// ============================================================================

pub(super) static PROVIDERS: Page = Page {
    route: Route::Providers,
    title_key: "providers.title",
    description_key: "providers.description",
    sections: &[
        Section {
            id: "kimi",
            heading: Some(Label::Literal("Kimi")),
            blocks: &[
                Block::Paragraph("providers.kimi.description"),
                code(
                    r#"routes:
  - match: "kimi"
    upstream:
      url: "https://api.kimi.com/coding"
      auth:
        header: "Authorization"
        value: "Bearer ${KIMI_API_KEY}""#,
                    "yaml",
                ),
            ],
        },
        Section {
            id: "zai",
            heading: Some(Label::Literal("Z.AI (GLM)")),
            blocks: &[
                Block::Paragraph("providers.zai.description"),
                code(
                    r#"routes:
  - match: "glm"
    upstream:
      url: "https://api.z.ai/api/anthropic"
      auth:
        header: "x-api-key"
        value: "${Z_AI_API_KEY}""#,
                    "yaml",
                ),
            ],
        },
        Section {
            id: "custom",
            heading: Some(Label::Key("providers.custom.title")),
            blocks: &[
                Block::Paragraph("providers.custom.description"),
                code(
                    r#"routes:
  - match: "my-model"
    upstream:
      url: "https://api.example.com/v1"
      auth:
        header: "Authorization"
        value: "Bearer ${MY_API_KEY}""#,
                    "yaml",
                ),
                Block::Callout(Callout {
                    tone: Tone::Warning,
                    title_key: Some("providers.custom.note.title"),
                    body_keys: &["providers.custom.note.description"],
                    items: &[],
                }),
            ],
        },
        Section {
            id: "routing",
            heading: Some(Label::Key("providers.routing.title")),
            blocks: &[
                Block::Paragraph("providers.routing.description"),
                Block::List(&[
                    ListItem::Key("providers.routing.rule1"),
                    ListItem::Key("providers.routing.rule2"),
                    ListItem::Key("providers.routing.rule3"),
                    ListItem::Key("providers.routing.rule4"),
                ]),
            ],
        },
    ],
};

// ============================================================================
// Service
// ============================================================================

pub(super) static SERVICE: Page = Page {
    route: Route::Service,
    title_key: "service.title",
    description_key: "service.description",
    sections: &[Section {
        id: "platforms",
        heading: None,
        blocks: &[Block::Tabs(&[
            Tab {
                label: "macOS (launchd)",
                blocks: &[
                    Block::Subheading(Label::Key("service.macos.title")),
                    Block::Subheading(Label::Key("service.macos.step1")),
                    code(
                        r#"cat > ~/Library/LaunchAgents/com.themagictower.summon.plist << 'EOF'
<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
    <key>Label</key>
    <string>com.themagictower.summon</string>
    <key>ProgramArguments</key>
    <array>
        <string>/Users/YOUR_USERNAME/.local/bin/summon</string>
        <string>--config</string>
        <string>/Users/YOUR_USERNAME/.config/summon/config.yaml</string>
    </array>
    <key>RunAtLoad</key>
    <true/>
    <key>KeepAlive</key>
    <true/>
    <key>StandardOutPath</key>
    <string>/Users/YOUR_USERNAME/.local/share/summon/summon.log</string>
    <key>StandardErrorPath</key>
    <string>/Users/YOUR_USERNAME/.local/share/summon/summon.error.log</string>
</dict>
</plist>
EOF"#,
                        "bash",
                    ),
                    Block::Subheading(Label::Key("service.macos.step2")),
                    code(
                        r#"mkdir -p ~/.local/share/summon
launchctl load ~/Library/LaunchAgents/com.themagictower.summon.plist
launchctl start com.themagictower.summon"#,
                        "bash",
                    ),
                    Block::Subheading(Label::Key("service.macos.manage")),
                    code(
                        r#"# Status
launchctl list | grep com.themagictower.summon

# Stop
launchctl stop com.themagictower.summon

# Restart
launchctl stop com.themagictower.summon && launchctl start com.themagictower.summon

# Unload
launchctl unload ~/Library/LaunchAgents/com.themagictower.summon.plist"#,
                        "bash",
                    ),
                ],
            },
            Tab {
                label: "Linux (systemd)",
                blocks: &[
                    Block::Subheading(Label::Key("service.linux.title")),
                    Block::Subheading(Label::Key("service.linux.step1")),
                    code(
                        r#"mkdir -p ~/.config/systemd/user

cat > ~/.config/systemd/user/summon.service << 'EOF'
[Unit]
Description=Summon LLM Proxy
After=network.target

[Service]
Type=simple
ExecStart=%h/.local/bin/summon --config %h/.config/summon/config.yaml
Restart=always
RestartSec=5
Environment="PATH=%h/.local/bin:/usr/local/bin:/usr/bin:/bin"

[Install]
WantedBy=default.target
EOF"#,
                        "bash",
                    ),
                    Block::Subheading(Label::Key("service.linux.step2")),
                    code(
                        r#"systemctl --user daemon-reload
systemctl --user enable summon.service
systemctl --user start summon.service"#,
                        "bash",
                    ),
                    Block::Subheading(Label::Key("service.linux.manage")),
                    code(
                        r#"systemctl --user status summon    # Status
systemctl --user stop summon      # Stop
systemctl --user restart summon   # Restart
systemctl --user disable summon   # Disable autostart"#,
                        "bash",
                    ),
                    Block::Callout(Callout {
                        tone: Tone::Info,
                        title_key: None,
                        body_keys: &["service.linux.wslNote"],
                        items: &[],
                    }),
                ],
            },
            Tab {
                label: "Windows",
                blocks: &[
                    Block::Subheading(Label::Key("service.windows.title")),
                    Block::Paragraph("service.windows.description"),
                    Block::Subheading(Label::Key("service.windows.nssm")),
                    code(
                        r#"# Install nssm
winget install nssm

# Register service
nssm install Summon "$env:LOCALAPPDATA\summon\bin\summon.exe"
nssm set Summon AppParameters "--config `"$env:APPDATA\summon\config.yaml`""
nssm set Summon DisplayName "Summon LLM Proxy"
nssm set Summon Start SERVICE_AUTO_START

# Start
Start-Service Summon"#,
                        "powershell",
                    ),
                    Block::Subheading(Label::Key("service.windows.scheduler")),
                    code(
                        r#"# Task Scheduler (auto-start at logon)
$Action = New-ScheduledTaskAction -Execute "$env:LOCALAPPDATA\summon\bin\summon.exe" -Argument "--config `"$env:USERPROFILE\.config\summon\config.yaml`""
$Trigger = New-ScheduledTaskTrigger -AtLogOn -User $env:USERNAME
Register-ScheduledTask -TaskName "Summon LLM Proxy" -Action $Action -Trigger $Trigger

# Manage
schtasks /run /tn "Summon LLM Proxy"      # Start
schtasks /end /tn "Summon LLM Proxy"      # Stop
schtasks /query /tn "Summon LLM Proxy"    # Status
schtasks /delete /tn "Summon LLM Proxy"   # Remove"#,
                        "powershell",
                    ),
                ],
            },
        ])],
    }],
};

// ============================================================================
// Troubleshooting
// ============================================================================

pub(super) static TROUBLESHOOTING: Page = Page {
    route: Route::Troubleshooting,
    title_key: "troubleshooting.title",
    description_key: "troubleshooting.description",
    sections: &[
        Section {
            id: "limitations",
            heading: Some(Label::Key("troubleshooting.limitations.title")),
            blocks: &[
                Block::Callout(Callout {
                    tone: Tone::Danger,
                    title_key: Some("troubleshooting.limitations.thinking.title"),
                    body_keys: &["troubleshooting.limitations.thinking.description"],
                    items: &[
                        "troubleshooting.limitations.thinking.reason1",
                        "troubleshooting.limitations.thinking.reason2",
                        "troubleshooting.limitations.thinking.reason3",
                    ],
                }),
                Block::Callout(Callout {
                    tone: Tone::Info,
                    title_key: Some("troubleshooting.limitations.recommendation.title"),
                    body_keys: &[],
                    items: &[
                        "troubleshooting.limitations.recommendation.tip1",
                        "troubleshooting.limitations.recommendation.tip2",
                    ],
                }),
            ],
        },
        Section {
            id: "connection",
            heading: Some(Label::Key("troubleshooting.connection.title")),
            blocks: &[
                Block::Subheading(Label::Key("troubleshooting.connection.refused.title")),
                Block::Paragraph("troubleshooting.connection.refused.description"),
                code(
                    r#"# Check if summon is running
ps aux | grep summon

# Check port
lsof -i :18081    # macOS/Linux
netstat -an | findstr 18081  # Windows"#,
                    "bash",
                ),
                Block::Subheading(Label::Key("troubleshooting.connection.timeout.title")),
                Block::Paragraph("troubleshooting.connection.timeout.description"),
            ],
        },
        Section {
            id: "config",
            heading: Some(Label::Key("troubleshooting.config.title")),
            blocks: &[
                Block::Subheading(Label::Key("troubleshooting.config.notFound.title")),
                Block::Paragraph("troubleshooting.config.notFound.description"),
                code(
                    r#"# Check config search order
ls -la ~/.config/summon/config.yaml
ls -la /etc/summon/config.yaml
ls -la ./config.yaml

# Or specify explicitly
summon --config /path/to/config.yaml"#,
                    "bash",
                ),
                Block::Subheading(Label::Key("troubleshooting.config.envVar.title")),
                Block::Paragraph("troubleshooting.config.envVar.description"),
                code(
                    r#"# Verify environment variables are set
echo $KIMI_API_KEY
echo $Z_AI_API_KEY

# Set them before starting summon
export KIMI_API_KEY="your-key"
summon"#,
                    "bash",
                ),
            ],
        },
        Section {
            id: "provider",
            heading: Some(Label::Key("troubleshooting.provider.title")),
            blocks: &[
                Block::Paragraph("troubleshooting.provider.description"),
                code(
                    r#"# Test direct connection to provider
curl -X POST https://api.kimi.com/coding/v1/messages \
  -H "Authorization: Bearer $KIMI_API_KEY" \
  -H "Content-Type: application/json" \
  -d '{"model":"kimi-for-coding","max_tokens":10,"messages":[{"role":"user","content":"hi"}]}'"#,
                    "bash",
                ),
            ],
        },
    ],
};

// ============================================================================
// Changelog
// ============================================================================

pub(super) static CHANGELOG: Page = Page {
    route: Route::Changelog,
    title_key: "changelog.title",
    description_key: "changelog.description",
    sections: &[Section {
        id: "releases",
        heading: None,
        blocks: &[Block::Releases(&[
            Release {
                version: "0.3.0",
                date: "2026-02-16",
                notes_key: "changelog.versions.v0_3_0",
            },
            Release {
                version: "0.2.8",
                date: "2026-02-14",
                notes_key: "changelog.versions.v0_2_8",
            },
            Release {
                version: "0.2.7",
                date: "2026-02-13",
                notes_key: "changelog.versions.v0_2_7",
            },
            Release {
                version: "0.2.6",
                date: "2026-02-12",
                notes_key: "changelog.versions.v0_2_6",
            },
            Release {
                version: "0.2.0",
                date: "2026-02-10",
                notes_key: "changelog.versions.v0_2_0",
            },
            Release {
                version: "0.1.0",
                date: "2026-02-08",
                notes_key: "changelog.versions.v0_1_0",
            },
        ])],
    }],
};
