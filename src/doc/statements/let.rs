/*!
# `LET [<variable> [= <expression>]]`

## Purpose
Assign, delete or list variables.

## Remarks
`LET a = <number expression>` and `LET a$ = <string expression>` assign.
`LET a` without a value deletes the variable. `LET` alone lists every
variable. The built-in variables cannot be assigned or deleted.

## Example
```text
LET a = 2 + 3
LET b$ = "text"
LET
a = 5
b$ = "text"
rn = 16838 (builtin)
ti = 1520 (builtin)
ti$ = "12:30:01" (builtin)
Ready.
```

*/
