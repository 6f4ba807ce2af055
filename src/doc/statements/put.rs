/*!
# `PUT [<expression>]`

## Purpose
Show a value without a new line.

## Example
```text
PUT "a"
PUT 1
a1
```

*/
