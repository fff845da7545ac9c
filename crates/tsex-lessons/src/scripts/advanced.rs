//! Lessons 14-25: generics, classes and type-level programming.

use crate::narration::{Script, Section};

pub const LESSON_14: Script = Script {
    goals: &["Write functions generic over their input type"],
    sections: &[
        Section {
            heading: "A generic identity",
            code: r#"function first<T>(items: T[]): T | undefined {
  return items[0];
}
console.log(first([3, 1]), first(["a"]));"#,
            output: &["3 a"],
            notes: &["T is inferred from the argument at each call"],
        },
        Section {
            heading: "Constraints",
            code: r#"function longest<T extends { length: number }>(a: T, b: T): T {
  return a.length >= b.length ? a : b;
}
console.log(longest("apple", "fig"), longest([1, 2], [1]).length);"#,
            output: &["apple 2"],
            notes: &["extends limits T to types that have length"],
        },
    ],
    summary: &["Generics keep the link between input and output types"],
};

pub const LESSON_15: Script = Script {
    goals: &["Declare generic interfaces and aliases"],
    sections: &[
        Section {
            heading: "Generic interfaces",
            code: r#"interface Box<T> { value: T }
const n: Box<number> = { value: 1 };
const s: Box<string> = { value: "x" };
console.log(n.value + 1, s.value.repeat(2));"#,
            output: &["2 xx"],
            notes: &["Box<number> and Box<string> are distinct types"],
        },
        Section {
            heading: "Generic aliases",
            code: r#"type Result<T, E = string> = { ok: true; value: T } | { ok: false; error: E };
const good: Result<number> = { ok: true, value: 5 };
const bad: Result<number> = { ok: false, error: "nope" };
console.log(good.ok, bad.ok);"#,
            output: &["true false"],
            notes: &["Type parameters may have defaults"],
        },
    ],
    summary: &["Parameterize a type once, reuse it everywhere"],
};

pub const LESSON_16: Script = Script {
    goals: &[
        "Write classes with constructors",
        "Use public, private and protected",
        "Inherit with extends",
    ],
    sections: &[
        Section {
            heading: "Parameter properties and access modifiers",
            code: r#"class Account {
  constructor(public readonly owner: string, private balance = 0) {}
  deposit(amount: number): number {
    this.balance += amount;
    return this.balance;
  }
}
const acc = new Account("Mia");
console.log(acc.owner, acc.deposit(50));"#,
            output: &["Mia 50"],
            notes: &["private members are hidden from callers at compile time"],
        },
        Section {
            heading: "Inheritance",
            code: r#"class Shape {
  constructor(protected name: string) {}
  describe(): string { return `a ${this.name}`; }
}
class Square extends Shape {
  constructor(private side: number) { super("square"); }
  area(): number { return this.side ** 2; }
}
const sq = new Square(3);
console.log(sq.describe(), sq.area());"#,
            output: &["a square 9"],
            notes: &["protected members are visible to subclasses"],
        },
    ],
    summary: &["Classes add runtime behavior on top of structural types"],
};

pub const LESSON_17: Script = Script {
    goals: &["Make classes implement interfaces"],
    sections: &[
        Section {
            heading: "implements",
            code: r#"interface Logger { log(message: string): void }
class ConsoleLogger implements Logger {
  log(message: string): void { console.log(`[log] ${message}`); }
}
const logger: Logger = new ConsoleLogger();
logger.log("ready");"#,
            output: &["[log] ready"],
            notes: &["implements checks the class against the interface"],
        },
        Section {
            heading: "Programming against the interface",
            code: r#"class MemoryLogger implements Logger {
  lines: string[] = [];
  log(message: string): void { this.lines.push(message); }
}
function run(logger: Logger) { logger.log("step 1"); }
const mem = new MemoryLogger();
run(mem);
console.log(mem.lines);"#,
            output: &["[ 'step 1' ]"],
            notes: &["Swapping implementations needs no change in run"],
        },
    ],
    summary: &["Depend on interfaces, construct concrete classes"],
};

pub const LESSON_18: Script = Script {
    goals: &["Write user-defined type guards with `x is T`"],
    sections: &[
        Section {
            heading: "A type predicate",
            code: r#"interface Admin { role: "admin"; permissions: string[] }
interface Guest { role: "guest" }
function isAdmin(u: Admin | Guest): u is Admin {
  return u.role === "admin";
}
const u: Admin | Guest = { role: "admin", permissions: ["all"] };
if (isAdmin(u)) console.log(u.permissions);"#,
            output: &["[ 'all' ]"],
            notes: &["Inside the if, u is narrowed to Admin"],
        },
        Section {
            heading: "Guarding unknown data",
            code: r#"function isStringArray(x: unknown): x is string[] {
  return Array.isArray(x) && x.every((v) => typeof v === "string");
}
const raw: unknown = JSON.parse('["a","b"]');
console.log(isStringArray(raw) ? raw.join("+") : "invalid");"#,
            output: &["a+b"],
            notes: &["The predicate is trusted; its body must really check"],
        },
    ],
    summary: &["Type guards move runtime checks into the type system"],
};

pub const LESSON_19: Script = Script {
    goals: &["Use Partial, Pick, Omit and Record"],
    sections: &[
        Section {
            heading: "Partial, Pick and Omit",
            code: r#"interface Todo { id: number; title: string; done: boolean }
type TodoPatch = Partial<Todo>;
type TodoPreview = Pick<Todo, "id" | "title">;
type NewTodo = Omit<Todo, "id">;
const patch: TodoPatch = { done: true };
const preview: TodoPreview = { id: 1, title: "write docs" };
const draft: NewTodo = { title: "ship", done: false };
console.log(patch, preview.title, draft.done);"#,
            output: &["{ done: true } write docs false"],
            notes: &["Each utility derives a new type from Todo"],
        },
        Section {
            heading: "Record",
            code: r#"type Role = "admin" | "user";
const limits: Record<Role, number> = { admin: 100, user: 10 };
console.log(limits.user);"#,
            output: &["10"],
            notes: &["Record<K, V> requires a value for every key in K"],
        },
    ],
    summary: &["Derive related types instead of copying them"],
};

pub const LESSON_20: Script = Script {
    goals: &["Build mapped types over keyof"],
    sections: &[
        Section {
            heading: "Mapping over keys",
            code: r#"type Flags<T> = { [K in keyof T]: boolean };
interface Settings { darkMode: string; beta: number }
const enabled: Flags<Settings> = { darkMode: true, beta: false };
console.log(enabled);"#,
            output: &["{ darkMode: true, beta: false }"],
            notes: &["K iterates over each property name of T"],
        },
        Section {
            heading: "Modifiers and key remapping",
            code: r#"type Mutable<T> = { -readonly [K in keyof T]: T[K] };
type Getters<T> = { [K in keyof T as `get${Capitalize<string & K>}`]: () => T[K] };
const g: Getters<{ name: string }> = { getName: () => "Ari" };
console.log(g.getName());"#,
            output: &["Ari"],
            notes: &["-readonly strips modifiers, as renames keys"],
        },
    ],
    summary: &["Partial and Readonly are mapped types themselves"],
};

pub const LESSON_21: Script = Script {
    goals: &["Choose types with `T extends U ? X : Y`"],
    sections: &[
        Section {
            heading: "A conditional type",
            code: r#"type IsString<T> = T extends string ? "yes" : "no";
const a: IsString<"hi"> = "yes";
const b: IsString<42> = "no";
console.log(a, b);"#,
            output: &["yes no"],
            notes: &["The condition is evaluated by the compiler"],
        },
        Section {
            heading: "Distribution over unions",
            code: r#"type NonNull<T> = T extends null | undefined ? never : T;
type Clean = NonNull<string | null | number>; // string | number
const values: Clean[] = ["a", 1];
console.log(values.length);"#,
            output: &["2"],
            notes: &["A naked type parameter distributes over each union member"],
        },
    ],
    summary: &["Conditional types are if-expressions for types"],
};

pub const LESSON_22: Script = Script {
    goals: &["Extract parts of a type with infer"],
    sections: &[
        Section {
            heading: "Inferring a return type",
            code: r#"type Ret<F> = F extends (...args: any[]) => infer R ? R : never;
function makeUser() { return { id: 1, name: "Jo" }; }
type User = Ret<typeof makeUser>;
const u: User = { id: 2, name: "Al" };
console.log(u.name);"#,
            output: &["Al"],
            notes: &["The built-in ReturnType works the same way"],
        },
        Section {
            heading: "Unwrapping promises and arrays",
            code: r#"type Awaited2<T> = T extends Promise<infer V> ? V : T;
type Elem<T> = T extends (infer E)[] ? E : never;
const n: Awaited2<Promise<number>> = 3;
const s: Elem<string[]> = "x";
console.log(n, s);"#,
            output: &["3 x"],
            notes: &["infer names a type variable inside the pattern"],
        },
    ],
    summary: &["infer pattern-matches on type structure"],
};

pub const LESSON_23: Script = Script {
    goals: &["Build string types with template literals"],
    sections: &[
        Section {
            heading: "Combining literal unions",
            code: r#"type Size = "sm" | "lg";
type Color = "red" | "blue";
type ClassName = `${Size}-${Color}`;
const cls: ClassName = "lg-red";
console.log(cls);"#,
            output: &["lg-red"],
            notes: &["ClassName has four members, one per combination"],
        },
        Section {
            heading: "Event names",
            code: r#"type EventName<T extends string> = `on${Capitalize<T>}`;
type Handlers = { [E in "click" | "focus" as EventName<E>]: () => void };
const h: Handlers = { onClick: () => {}, onFocus: () => {} };
console.log(Object.keys(h));"#,
            output: &["[ 'onClick', 'onFocus' ]"],
            notes: &["Capitalize is an intrinsic string manipulation type"],
        },
    ],
    summary: &["Template literal types generate string unions"],
};

pub const LESSON_24: Script = Script {
    goals: &[
        "Model states with a discriminated union",
        "Get exhaustiveness checks from never",
    ],
    sections: &[
        Section {
            heading: "States as a union",
            code: r#"type State =
  | { status: "idle" }
  | { status: "loading" }
  | { status: "success"; data: string }
  | { status: "error"; message: string };

function render(s: State): string {
  switch (s.status) {
    case "idle": return "waiting";
    case "loading": return "loading...";
    case "success": return `data: ${s.data}`;
    case "error": return `error: ${s.message}`;
  }
}
console.log(render({ status: "success", data: "ok" }));"#,
            output: &["data: ok"],
            notes: &["data only exists in the success branch"],
        },
        Section {
            heading: "Exhaustiveness",
            code: r#"function assertNever(x: never): never {
  throw new Error(`unhandled: ${JSON.stringify(x)}`);
}
function next(s: State): State {
  switch (s.status) {
    case "idle": return { status: "loading" };
    case "loading": return { status: "success", data: "done" };
    case "success":
    case "error": return { status: "idle" };
    default: return assertNever(s);
  }
}
console.log(next({ status: "idle" }).status);"#,
            output: &["loading"],
            notes: &["Adding a new state makes the default branch fail to compile"],
        },
    ],
    summary: &["Impossible states become unrepresentable"],
};

pub const LESSON_25: Script = Script {
    goals: &["Write recursive DeepReadonly and DeepPartial"],
    sections: &[
        Section {
            heading: "DeepReadonly",
            code: r#"type DeepReadonly<T> = T extends (infer E)[]
  ? ReadonlyArray<DeepReadonly<E>>
  : T extends object
    ? { readonly [K in keyof T]: DeepReadonly<T[K]> }
    : T;
const cfg: DeepReadonly<{ db: { host: string } }> = { db: { host: "localhost" } };
// cfg.db.host = "x"; // error TS2540
console.log(cfg.db.host);"#,
            output: &["localhost"],
            notes: &["The type recurses into nested objects and arrays"],
        },
        Section {
            heading: "DeepPartial",
            code: r#"type DeepPartial<T> = { [K in keyof T]?: T[K] extends object ? DeepPartial<T[K]> : T[K] };
interface Config { server: { port: number; host: string }; debug: boolean }
const override: DeepPartial<Config> = { server: { port: 8080 } };
console.log(override.server?.port);"#,
            output: &["8080"],
            notes: &["Useful for configuration overrides merged onto defaults"],
        },
    ],
    summary: &["Recursive types reach every level of a structure"],
};
