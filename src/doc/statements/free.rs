/*!
# `FREE`

## Purpose
Report the free program and variable memory.

## Remarks
The interpreter has a pool of 32768 bytes shared by program lines and
variables.

## Example
```text
FREE
32768 bytes free.
```

*/
