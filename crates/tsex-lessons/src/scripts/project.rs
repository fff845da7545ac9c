//! Lessons 28-30: project layout, compiler options and publishing.

use crate::narration::{Script, Section};

pub const LESSON_28: Script = Script {
    goals: &[
        "Lay out a Node.js + TypeScript project",
        "Wire build and dev scripts",
    ],
    sections: &[
        Section {
            heading: "Directory layout",
            code: r#"my-app/
  package.json
  tsconfig.json
  src/
    index.ts
    services/
    models/
  dist/        # compiled output, not committed"#,
            output: &[],
            notes: &["Sources live in src/, tsc writes JavaScript to dist/"],
        },
        Section {
            heading: "package.json scripts",
            code: r#"{
  "scripts": {
    "dev": "ts-node src/index.ts",
    "build": "tsc -p tsconfig.json",
    "start": "node dist/index.js"
  }
}"#,
            output: &["$ npm run build && npm start"],
            notes: &["Run TypeScript directly in development, compiled JS in production"],
        },
    ],
    summary: &["Keep source and build output apart"],
};

pub const LESSON_29: Script = Script {
    goals: &["Turn on strict mode", "Shorten imports with baseUrl and paths"],
    sections: &[
        Section {
            heading: "Strictness flags",
            code: r#"{
  "compilerOptions": {
    "strict": true,
    "noUncheckedIndexedAccess": true,
    "exactOptionalPropertyTypes": true
  }
}"#,
            output: &[],
            notes: &["strict enables strictNullChecks, noImplicitAny and friends"],
        },
        Section {
            heading: "baseUrl and paths",
            code: r#"{
  "compilerOptions": {
    "baseUrl": ".",
    "paths": { "@models/*": ["src/models/*"] }
  }
}
// import { User } from "@models/user";"#,
            output: &[],
            notes: &["Runtime resolution needs the same aliases (tsconfig-paths or a bundler)"],
        },
    ],
    summary: &["tsconfig is where type safety is dialed up"],
};

pub const LESSON_30: Script = Script {
    goals: &[
        "Emit declaration files",
        "Describe a package's entry points for consumers",
    ],
    sections: &[
        Section {
            heading: "Emitting .d.ts files",
            code: r#"{
  "compilerOptions": {
    "declaration": true,
    "declarationMap": true,
    "outDir": "dist"
  }
}"#,
            output: &["dist/index.js", "dist/index.d.ts"],
            notes: &["Consumers get types without reading your sources"],
        },
        Section {
            heading: "package.json entry points",
            code: r#"{
  "name": "@acme/sdk",
  "main": "dist/index.js",
  "types": "dist/index.d.ts",
  "files": ["dist"]
}"#,
            output: &["$ npm pack --dry-run"],
            notes: &["types tells editors and tsc where the declarations are"],
        },
    ],
    summary: &["Ship JavaScript plus declarations, nothing else"],
};
