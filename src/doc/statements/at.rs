/*!
# `AT <x>, <y>`

## Purpose
Move the cursor to column `<x>` and row `<y>`.

## Remarks
Both coordinates are number expressions and count from zero. A value
outside 0 to 255 is a syntax error.

## Example
```text
CLS
AT 5, 2
PUT "Hello"
```

*/
