/*!
# Expressions and Variables

There are two types of value: signed 32-bit integers and strings.

A variable name is a letter followed by letters or digits. Only the first
two characters count, so `count` and `co` are the same variable. Upper
and lower case are different. A `$` after the name makes it a string
variable; `a` and `a$` are different variables.

```text
LET a = 5
LET na$ = "Ada"
```

## Number expressions

A number expression is a chain of terms joined by operators. A term is
an integer literal, with an optional sign, or an integer variable.

| Operator | Meaning          |
|----------|------------------|
| `+`      | Addition         |
| `-`      | Subtraction      |
| `*`      | Multiplication   |
| `/`      | Integer division |
| `%`      | Remainder        |

There is no precedence. The chain is worked out strictly from left to
right, so `10 - 2 * 3` is 24. Results wrap around on overflow. Dividing
by zero stops with `Division by zero!`.

## String expressions

A string expression is a literal in double quotes or a string variable.
Strings cannot be joined.

## Built-in variables

| Name  | Value                                      |
|-------|--------------------------------------------|
| `ti`  | Milliseconds since start-up                |
| `ti$` | Time of day as `HH:MM:SS`                  |
| `rn`  | A new random number from 0 to 32767        |

They are read like any variable but cannot be changed. `SEED` restarts
the sequence of `rn`.

*/
