/*!
# `CLEAR`

## Purpose
Delete all variables.

## Remarks
The built-in variables `ti`, `ti$` and `rn` are not affected.
The program is kept.

## Example
```text
LET a = 5
CLEAR
PUT a
Variable not found!
```

*/
