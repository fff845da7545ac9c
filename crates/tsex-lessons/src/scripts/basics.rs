//! Lessons 1-13: annotations, inference, objects, functions and narrowing.

use crate::narration::{Script, Section};

pub const LESSON_01: Script = Script {
    goals: &[
        "Run a .ts file directly with ts-node",
        "See that type annotations disappear at runtime",
    ],
    sections: &[
        Section {
            heading: "Printing to the console",
            code: r#"const greeting: string = "Hello, TypeScript!";
console.log(greeting);"#,
            output: &["Hello, TypeScript!"],
            notes: &["Run it with: npx ts-node src/lesson01.ts"],
        },
        Section {
            heading: "Compile-time errors",
            code: r#"let count: number = 1;
// count = "two";  // error TS2322: Type 'string' is not assignable to type 'number'.
count += 1;
console.log(`count = ${count}`);"#,
            output: &["count = 2"],
            notes: &[
                "The commented line is rejected by the compiler before anything runs",
                "The emitted JavaScript carries no type information",
            ],
        },
    ],
    summary: &["ts-node compiles and runs in one step"],
};

pub const LESSON_02: Script = Script {
    goals: &[
        "Annotate variables with number, string and boolean",
        "Understand why any switches the checker off",
    ],
    sections: &[
        Section {
            heading: "Primitive annotations",
            code: r#"const age: number = 30;
const name: string = "Kim";
const isAdmin: boolean = false;
console.log(name, age, isAdmin);"#,
            output: &["Kim 30 false"],
            notes: &["Annotations follow the variable name after a colon"],
        },
        Section {
            heading: "The any escape hatch",
            code: r#"let anything: any = 42;
anything = "now a string";
anything.notAMethod(); // compiles, fails at runtime"#,
            output: &["TypeError: anything.notAMethod is not a function"],
            notes: &["Prefer unknown when a value's type is genuinely not known"],
        },
    ],
    summary: &["Use precise primitives; keep any out of new code"],
};

pub const LESSON_03: Script = Script {
    goals: &[
        "Let the compiler infer types from initializers",
        "Know when an explicit annotation still helps",
    ],
    sections: &[
        Section {
            heading: "Inference from values",
            code: r#"let total = 10;        // number
const label = "items"; // "items" (literal)
const list = [1, 2, 3]; // number[]
console.log(typeof total, typeof label, Array.isArray(list));"#,
            output: &["number string true"],
            notes: &["const bindings keep the literal type, let bindings widen it"],
        },
        Section {
            heading: "Return type inference",
            code: r#"function double(n: number) {
  return n * 2; // inferred: number
}
console.log(double(21));"#,
            output: &["42"],
            notes: &["Annotate return types on exported functions to pin the contract"],
        },
    ],
    summary: &["Annotate parameters, let inference fill in locals"],
};

pub const LESSON_04: Script = Script {
    goals: &["Declare typed arrays", "Model fixed-length records with tuples"],
    sections: &[
        Section {
            heading: "Array types",
            code: r#"const scores: number[] = [90, 85, 77];
const tags: Array<string> = ["ts", "node"];
console.log(scores.length, tags.join(","));"#,
            output: &["3 ts,node"],
            notes: &["number[] and Array<number> are the same type"],
        },
        Section {
            heading: "Tuples",
            code: r#"const point: [number, number] = [3, 4];
const entry: [string, number] = ["apples", 5];
const [fruit, qty] = entry;
console.log(point[0] + point[1], fruit, qty);"#,
            output: &["7 apples 5"],
            notes: &["Each position in a tuple has its own type"],
        },
    ],
    summary: &["Arrays are homogeneous, tuples are positional"],
};

pub const LESSON_05: Script = Script {
    goals: &["Write inline object types", "Catch misspelled and missing properties"],
    sections: &[
        Section {
            heading: "Inline object types",
            code: r#"const user: { id: number; name: string } = { id: 1, name: "Lee" };
console.log(`${user.id}: ${user.name}`);"#,
            output: &["1: Lee"],
            notes: &["Every listed property is required by default"],
        },
        Section {
            heading: "Excess property checks",
            code: r#"const user: { id: number; name: string } = {
  id: 2,
  name: "Park",
  // nmae: "typo", // error TS2353: Object literal may only specify known properties
};
console.log(Object.keys(user));"#,
            output: &["[ 'id', 'name' ]"],
            notes: &["Fresh object literals are checked for unknown keys"],
        },
    ],
    summary: &["Object types describe shape, not class"],
};

pub const LESSON_06: Script = Script {
    goals: &[
        "Annotate parameters and return values",
        "Use optional and default parameters",
    ],
    sections: &[
        Section {
            heading: "Parameter and return annotations",
            code: r#"function add(a: number, b: number): number {
  return a + b;
}
const shout = (text: string): string => text.toUpperCase();
console.log(add(2, 3), shout("hi"));"#,
            output: &["5 HI"],
            notes: &["Arrow functions take annotations the same way"],
        },
        Section {
            heading: "Optional and default parameters",
            code: r#"function greet(name: string, greeting = "Hello", suffix?: string): string {
  return `${greeting}, ${name}${suffix ?? ""}`;
}
console.log(greet("Ada"));
console.log(greet("Ada", "Hi", "!"));"#,
            output: &["Hello, Ada", "Hi, Ada!"],
            notes: &["An optional parameter has type T | undefined inside the body"],
        },
    ],
    summary: &["Function types are checked at every call site"],
};

pub const LESSON_07: Script = Script {
    goals: &["Combine types with unions", "Restrict values with literal types"],
    sections: &[
        Section {
            heading: "Union types",
            code: r#"function format(id: number | string): string {
  return typeof id === "number" ? id.toFixed(0) : id.trim();
}
console.log(format(7), format("  a7 "));"#,
            output: &["7 a7"],
            notes: &["Only members shared by every variant are usable before narrowing"],
        },
        Section {
            heading: "Literal types",
            code: r#"type Direction = "up" | "down";
function move(dir: Direction, steps: number): string {
  return `${dir} x${steps}`;
}
console.log(move("up", 3));
// move("left", 1); // error TS2345"#,
            output: &["up x3"],
            notes: &["A literal union is a closed set of allowed values"],
        },
    ],
    summary: &["Unions say \"one of these\", literals say \"exactly this\""],
};

pub const LESSON_08: Script = Script {
    goals: &["Name reusable types with type aliases"],
    sections: &[
        Section {
            heading: "Aliasing object shapes",
            code: r#"type Point = { x: number; y: number };
function distance(a: Point, b: Point): number {
  return Math.hypot(a.x - b.x, a.y - b.y);
}
console.log(distance({ x: 0, y: 0 }, { x: 3, y: 4 }));"#,
            output: &["5"],
            notes: &["An alias is just a name; it creates no new runtime value"],
        },
        Section {
            heading: "Aliasing unions and functions",
            code: r#"type Id = number | string;
type Formatter = (value: Id) => string;
const fmt: Formatter = (value) => `#${value}`;
console.log(fmt(12), fmt("ab"));"#,
            output: &["#12 #ab"],
            notes: &["The parameter type of fmt is inferred from Formatter"],
        },
    ],
    summary: &["Aliases keep long types readable and consistent"],
};

pub const LESSON_09: Script = Script {
    goals: &["Group constants with enums", "Compare numeric and string enums"],
    sections: &[
        Section {
            heading: "Numeric enums",
            code: r#"enum Level { Low, Medium, High }
console.log(Level.Medium, Level[2]);"#,
            output: &["1 High"],
            notes: &["Numeric enums get a reverse mapping from value to name"],
        },
        Section {
            heading: "String enums",
            code: r#"enum Status { Active = "ACTIVE", Banned = "BANNED" }
function describe(s: Status): string {
  return s === Status.Active ? "can log in" : "blocked";
}
console.log(describe(Status.Banned));"#,
            output: &["blocked"],
            notes: &["String enums serialize to readable values"],
        },
    ],
    summary: &["A literal union is often a lighter alternative to an enum"],
};

pub const LESSON_10: Script = Script {
    goals: &[
        "Declare interfaces",
        "See structural typing: shape matters, names do not",
    ],
    sections: &[
        Section {
            heading: "Declaring an interface",
            code: r#"interface User {
  id: number;
  email: string;
}
const u: User = { id: 1, email: "a@b.dev" };
console.log(u.email);"#,
            output: &["a@b.dev"],
            notes: &["Interfaces describe the shape of objects"],
        },
        Section {
            heading: "Structural compatibility",
            code: r#"interface Named { name: string }
const pet = { name: "Rex", legs: 4 };
function hello(n: Named): string {
  return `hello ${n.name}`;
}
console.log(hello(pet));"#,
            output: &["hello Rex"],
            notes: &["pet was never declared as Named, yet it fits the shape"],
        },
    ],
    summary: &["TypeScript compares structure, not declarations"],
};

pub const LESSON_11: Script = Script {
    goals: &["Extend interfaces", "Combine types with intersections"],
    sections: &[
        Section {
            heading: "extends",
            code: r#"interface Animal { name: string }
interface Dog extends Animal { breed: string }
const d: Dog = { name: "Bo", breed: "Corgi" };
console.log(`${d.name} the ${d.breed}`);"#,
            output: &["Bo the Corgi"],
            notes: &["Dog has every property of Animal plus its own"],
        },
        Section {
            heading: "Intersection types",
            code: r#"type Timestamped = { createdAt: Date };
type Tagged = { tags: string[] };
type Note = { text: string } & Timestamped & Tagged;
const n: Note = { text: "hi", createdAt: new Date(0), tags: ["a"] };
console.log(n.tags.length, n.createdAt.getUTCFullYear());"#,
            output: &["1 1970"],
            notes: &["An intersection requires all members at once"],
        },
    ],
    summary: &["extends for hierarchies, & for mixing"],
};

pub const LESSON_12: Script = Script {
    goals: &["Mark properties optional or readonly", "Use readonly arrays"],
    sections: &[
        Section {
            heading: "Optional and readonly properties",
            code: r#"interface Profile {
  readonly id: number;
  nickname?: string;
}
const p: Profile = { id: 7 };
// p.id = 8; // error TS2540: Cannot assign to 'id'
console.log(p.nickname ?? "(none)");"#,
            output: &["(none)"],
            notes: &["readonly is enforced by the compiler only"],
        },
        Section {
            heading: "Readonly arrays",
            code: r#"const primes: readonly number[] = [2, 3, 5];
// primes.push(7); // error TS2339
console.log(primes.slice(1));"#,
            output: &["[ 3, 5 ]"],
            notes: &["Non-mutating methods such as slice stay available"],
        },
    ],
    summary: &["Make immutability visible in the type"],
};

pub const LESSON_13: Script = Script {
    goals: &["Narrow unions with typeof, in and instanceof"],
    sections: &[
        Section {
            heading: "typeof and in",
            code: r#"type Cat = { meow: () => string };
type Fish = { swim: () => string };
function act(x: number | Cat | Fish): string {
  if (typeof x === "number") return `number ${x}`;
  if ("meow" in x) return x.meow();
  return x.swim();
}
console.log(act(1), act({ meow: () => "meow" }));"#,
            output: &["number 1 meow"],
            notes: &["Each check removes variants from the union"],
        },
        Section {
            heading: "instanceof",
            code: r#"function message(e: Error | string): string {
  return e instanceof Error ? e.message : e;
}
console.log(message(new Error("boom")), message("plain"));"#,
            output: &["boom plain"],
            notes: &["instanceof narrows to class instances"],
        },
    ],
    summary: &["Narrowing turns a wide type into the one you need"],
};
