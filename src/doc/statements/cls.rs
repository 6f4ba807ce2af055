/*!
# `CLS`

## Purpose
Clear the screen.

## Example
```text
CLS
```

*/
