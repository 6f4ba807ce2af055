/*!
# `PRINT [<expression>]`

## Purpose
Show a value followed by a new line.

## Remarks
`PRINT` alone prints an empty line.

## Example
```text
PRINT 7 * 6
42
```

*/
