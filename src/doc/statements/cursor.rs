/*!
# `CURSOR ON|OFF`

## Purpose
Show or hide the cursor.

## Remarks
`ON` and `OFF` may be written in any case. Anything else is a syntax error.

## Example
```text
CURSOR off
```

*/
