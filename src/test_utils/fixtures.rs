//! Test fixtures for project configurations and registry documents.

use serde_json::{Value, json};

/// A `components.json` for one framework, editable before it is serialized.
#[derive(Debug, Clone)]
pub struct ConfigFixture {
    pub value: Value,
}

impl ConfigFixture {
    /// React project: style `new-york`, base color `slate`, `@/` aliases.
    pub fn react() -> Self {
        Self {
            value: json!({
                "$schema": "https://ui.shadcn.com/schema.json",
                "style": "new-york",
                "rsc": false,
                "tsx": true,
                "tailwind": {
                    "config": "tailwind.config.js",
                    "css": "src/index.css",
                    "baseColor": "slate",
                    "cssVariables": true
                },
                "aliases": {
                    "components": "@/components",
                    "utils": "@/lib/utils"
                }
            }),
        }
    }

    /// SvelteKit project: style `default`, `$lib` aliases.
    pub fn svelte() -> Self {
        Self {
            value: json!({
                "$schema": "https://shadcn-svelte.com/schema.json",
                "style": "default",
                "typescript": true,
                "tailwind": {
                    "config": "tailwind.config.js",
                    "css": "src/app.css",
                    "baseColor": "zinc"
                },
                "aliases": {
                    "components": "$lib/components",
                    "utils": "$lib/utils"
                }
            }),
        }
    }

    /// Vite + Vue project: style `default`, `@/` aliases.
    pub fn vue() -> Self {
        Self {
            value: json!({
                "$schema": "https://shadcn-vue.com/schema.json",
                "style": "default",
                "typescript": true,
                "framework": "vite",
                "tailwind": {
                    "config": "tailwind.config.js",
                    "css": "src/assets/index.css",
                    "baseColor": "slate"
                },
                "aliases": {
                    "components": "@/components",
                    "utils": "@/lib/utils"
                }
            }),
        }
    }

    /// Solid project: no style segment in registry URLs, `~/` aliases.
    pub fn solid() -> Self {
        Self {
            value: json!({
                "$schema": "https://shadcn-solid.com/schema.json",
                "tsx": true,
                "tailwind": {
                    "config": "tailwind.config.cjs",
                    "css": "src/root.css",
                    "baseColor": "slate"
                },
                "aliases": {
                    "components": "~/components",
                    "utils": "~/lib/utils"
                }
            }),
        }
    }

    /// Sets `tailwind.<key>`.
    #[must_use]
    pub fn tailwind(mut self, key: &str, value: Value) -> Self {
        self.value["tailwind"][key] = value;
        self
    }

    /// Sets a top-level key.
    #[must_use]
    pub fn set(mut self, key: &str, value: Value) -> Self {
        self.value[key] = value;
        self
    }

    #[must_use]
    pub fn render(&self) -> String {
        serde_json::to_string_pretty(&self.value).unwrap_or_default()
    }
}

/// `tsconfig.json` mapping `@/*` to `./src/*`.
pub fn react_tsconfig() -> String {
    r#"{
  // Generated by the framework template
  "compilerOptions": {
    "baseUrl": ".",
    "paths": {
      "@/*": ["./src/*"],
    },
  },
}"#
    .to_string()
}

/// `tsconfig.json` mapping `~/*` to `./src/*`.
pub fn solid_tsconfig() -> String {
    json!({ "compilerOptions": { "paths": { "~/*": ["./src/*"] } } }).to_string()
}

/// `.svelte-kit/tsconfig.json` as written by `svelte-kit sync`.
pub fn svelte_kit_tsconfig() -> String {
    json!({
        "compilerOptions": {
            "paths": {
                "$lib": ["../src/lib"],
                "$lib/*": ["../src/lib/*"]
            }
        }
    })
    .to_string()
}

/// A registry component document.
pub fn component(
    name: &str,
    registry_dependencies: &[&str],
    npm_dependencies: &[&str],
    files: &[(&str, &str)],
) -> Value {
    json!({
        "name": name,
        "type": "components:ui",
        "dependencies": npm_dependencies,
        "registryDependencies": registry_dependencies,
        "files": files
            .iter()
            .map(|(file, content)| json!({ "name": file, "content": content }))
            .collect::<Vec<_>>()
    })
}

/// React `button` source as served by the registry.
pub const REACT_BUTTON: &str = r#""use client"

import * as React from "react"
import { Slot } from "@radix-ui/react-slot"
import { cva } from "class-variance-authority"

import { cn } from "@/lib/utils"

const buttonVariants = cva(
  "inline-flex items-center justify-center rounded-md text-sm font-medium",
  {
    variants: {
      variant: {
        default: "bg-primary text-primary-foreground hover:bg-primary/90",
        outline: "border border-input bg-background",
      },
    },
    defaultVariants: {
      variant: "default",
    },
  }
)

export function Button({ className, variant, ...props }) {
  return <Slot className={cn(buttonVariants({ variant }), className)} {...props} />
}
"#;

/// React `dialog` source importing `button` through the registry root.
pub const REACT_DIALOG: &str = r#"import * as React from "react"

import { cn } from "@/lib/utils"
import { Button } from "@/registry/new-york/ui/button"

export function DialogFooter({ className }) {
  return <div className={cn("flex gap-2", className)}><Button /></div>
}
"#;

/// Light and dark `inlineColors` palette document.
pub fn palette() -> Value {
    json!({
        "inlineColors": {
            "light": {
                "background": "white",
                "foreground": "slate-950",
                "primary": "slate-900",
                "primary-foreground": "slate-50",
                "border": "slate-200",
                "input": "slate-200"
            },
            "dark": {
                "background": "slate-950",
                "foreground": "slate-50",
                "primary": "slate-50",
                "primary-foreground": "slate-900",
                "border": "slate-800",
                "input": "slate-800"
            }
        },
        "cssVars": {}
    })
}
